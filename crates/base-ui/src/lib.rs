//! Design-system primitives for landing page sections.
//!
//! Each primitive renders itself to an HTML fragment:
//! - `Title` / `Text` - Typography
//! - `Card` - Rounded container
//! - `Button` - Variant-styled button with optional icon
//! - `Link` - Anchor, with a safe external variant
//! - `Video` - Inline media element
//!
//! Text and attribute values are escaped by `Element`.

mod button;
mod card;
mod html;
mod link;
mod typography;
mod video;

pub use button::*;
pub use card::*;
pub use html::*;
pub use link::*;
pub use typography::*;
pub use video::*;
