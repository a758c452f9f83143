//! Wire types shared between the weather provider client and the site.

pub use forecast::*;
pub use report::*;

mod forecast;
mod report;
