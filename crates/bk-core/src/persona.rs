//! Persona cards and what other players get to see of them.

use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, Reveals};
use crate::id::PlayerId;

/// A randomly generated identity card bound to one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Stable identifier, shared with the owning player.
    pub id: PlayerId,
    /// Display name. Always visible.
    pub name: String,
    /// Profession.
    pub profession: String,
    /// Age in years.
    pub age: u32,
    /// State of health.
    pub health: String,
    /// Hobby.
    pub hobby: String,
    /// Phobia.
    pub phobia: String,
    /// Character trait.
    pub r#trait: String,
    /// Baggage.
    pub baggage: String,
    /// Extra fact.
    pub fact: String,
    /// Which attributes the owner has revealed.
    pub revealed: Reveals,
    /// Whether this persona is marked for elimination.
    pub voted: bool,
}

impl Persona {
    /// The attribute's value as text.
    pub fn value(&self, attr: Attribute) -> String {
        match attr {
            Attribute::Profession => self.profession.clone(),
            Attribute::Age => self.age.to_string(),
            Attribute::Health => self.health.clone(),
            Attribute::Hobby => self.hobby.clone(),
            Attribute::Phobia => self.phobia.clone(),
            Attribute::Trait => self.r#trait.clone(),
            Attribute::Baggage => self.baggage.clone(),
            Attribute::Fact => self.fact.clone(),
        }
    }

    /// What a viewer sees of this card. The owner sees everything, even
    /// attributes still hidden from the table; others only the revealed ones.
    pub fn view(&self, viewer_is_owner: bool) -> PersonaView {
        let attributes = Attribute::ALL
            .into_iter()
            .map(|attr| {
                let visible = viewer_is_owner || self.revealed.is_revealed(attr);
                (attr, visible.then(|| self.value(attr)))
            })
            .collect();
        PersonaView {
            id: self.id,
            name: self.name.clone(),
            voted: self.voted,
            attributes,
        }
    }
}

/// A persona card as rendered for one viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaView {
    /// The persona's ID.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Vote flag, visible to everyone.
    pub voted: bool,
    /// Attributes in card order; `None` means hidden from this viewer.
    pub attributes: Vec<(Attribute, Option<String>)>,
}

impl PersonaView {
    /// The visible value of one attribute, if any.
    pub fn get(&self, attr: Attribute) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(a, _)| *a == attr)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Number of attributes hidden from this viewer.
    pub fn hidden_count(&self) -> usize {
        self.attributes.iter().filter(|(_, v)| v.is_none()).count()
    }
}
