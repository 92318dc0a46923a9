use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Catalog identifier for a role. All roles except `LoyalServant` and
/// `Minion` are single-instance: a game holds at most one of each.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleName {
    Merlin,
    Percival,
    Mordred,
    Morgana,
    Untrustworthy,
    SeniorMessenger,
    JuniorMessenger,
    EvilMessenger,
    GoodSorcerer,
    EvilSorcerer,
    Troublemaker,
    Trickster,
    Cleric,
    GoodLancelot,
    EvilLancelot,
    Oberon,
    Lunatic,
    Brute,
    Revealer,
    GoodRogue,
    EvilRogue,
    Assassin,
    Minion,
    LoyalServant,
}

#[derive(Copy, Clone, Debug)]
pub struct RoleDef {
    pub name: RoleName,
    pub evil: bool,
    pub display_name: &'static str,
}

/// The role catalog, loaded once and never mutated at runtime.
pub static ROLE_CATALOG: &[RoleDef] = &[
    RoleDef { name: RoleName::Merlin, evil: false, display_name: "Merlin" },
    RoleDef { name: RoleName::Percival, evil: false, display_name: "Percival" },
    RoleDef { name: RoleName::Mordred, evil: true, display_name: "Mordred" },
    RoleDef { name: RoleName::Morgana, evil: true, display_name: "Morgana" },
    RoleDef { name: RoleName::Untrustworthy, evil: false, display_name: "Untrustworthy Servant" },
    RoleDef { name: RoleName::SeniorMessenger, evil: false, display_name: "Senior Messenger" },
    RoleDef { name: RoleName::JuniorMessenger, evil: false, display_name: "Junior Messenger" },
    RoleDef { name: RoleName::EvilMessenger, evil: true, display_name: "Evil Messenger" },
    RoleDef { name: RoleName::GoodSorcerer, evil: false, display_name: "Good Sorcerer" },
    RoleDef { name: RoleName::EvilSorcerer, evil: true, display_name: "Evil Sorcerer" },
    RoleDef { name: RoleName::Troublemaker, evil: false, display_name: "Troublemaker" },
    RoleDef { name: RoleName::Trickster, evil: true, display_name: "Trickster" },
    RoleDef { name: RoleName::Cleric, evil: false, display_name: "Cleric" },
    RoleDef { name: RoleName::GoodLancelot, evil: false, display_name: "Good Lancelot" },
    RoleDef { name: RoleName::EvilLancelot, evil: true, display_name: "Evil Lancelot" },
    RoleDef { name: RoleName::Oberon, evil: true, display_name: "Oberon" },
    RoleDef { name: RoleName::Lunatic, evil: true, display_name: "Lunatic" },
    RoleDef { name: RoleName::Brute, evil: true, display_name: "Brute" },
    RoleDef { name: RoleName::Revealer, evil: true, display_name: "Revealer" },
    RoleDef { name: RoleName::GoodRogue, evil: false, display_name: "Good Rogue" },
    RoleDef { name: RoleName::EvilRogue, evil: true, display_name: "Evil Rogue" },
    RoleDef { name: RoleName::Assassin, evil: true, display_name: "Assassin" },
    RoleDef { name: RoleName::Minion, evil: true, display_name: "Minion of Mordred" },
    RoleDef { name: RoleName::LoyalServant, evil: false, display_name: "Loyal Servant of Arthur" },
];

impl RoleName {
    pub fn def(self) -> &'static RoleDef {
        ROLE_CATALOG
            .iter()
            .find(|def| def.name == self)
            .expect("every role has a catalog entry")
    }

    pub fn evil(self) -> bool {
        self.def().evil
    }

    pub fn display_name(self) -> &'static str {
        self.def().display_name
    }

    /// Whether a game may contain more than one of this role.
    pub fn is_duplicate(self) -> bool {
        matches!(self, RoleName::Minion | RoleName::LoyalServant)
    }
}

impl Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How many players may hold a role in a given game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoleSlot {
    SingleInstance(RoleName),
    Counted { role: RoleName, limit: usize },
}

impl RoleSlot {
    pub fn role(&self) -> RoleName {
        match *self {
            RoleSlot::SingleInstance(role) => role,
            RoleSlot::Counted { role, .. } => role,
        }
    }

    pub fn capacity(&self) -> usize {
        match *self {
            RoleSlot::SingleInstance(_) => 1,
            RoleSlot::Counted { limit, .. } => limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_one_entry_per_role() {
        for def in ROLE_CATALOG {
            let count = ROLE_CATALOG.iter().filter(|d| d.name == def.name).count();
            assert_eq!(count, 1, "{} appears {} times in the catalog", def.name, count);
        }
    }

    #[test]
    fn only_servant_and_minion_are_duplicate_eligible() {
        for def in ROLE_CATALOG {
            let expected = matches!(def.name, RoleName::Minion | RoleName::LoyalServant);
            assert_eq!(def.name.is_duplicate(), expected);
        }
    }
}
