//! Thin namespace wrapper for the API resource modules.

pub mod quotes {
    pub use crate::quotes::*;
}

pub mod policyholders {
    pub use crate::policyholders::*;
}

pub mod applications {
    pub use crate::applications::*;
}

pub mod policies {
    pub use crate::policies::*;
}

pub mod claims {
    pub use crate::claims::*;
}
