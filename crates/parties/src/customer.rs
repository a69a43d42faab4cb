use serde::{Deserialize, Serialize};

use stockroom_core::{CustomerId, Entity};

/// A customer: an actor that can request orders.
///
/// Carries nothing but its identity, which every order it places records.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
}

impl Customer {
    pub fn new() -> Self {
        Self::with_id(CustomerId::new())
    }

    pub fn with_id(id: CustomerId) -> Self {
        Self { id }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }
}

impl Default for Customer {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
