pub mod image_resolver;
pub mod records;
pub mod scale;
pub mod scroll;
pub mod types;

pub use image_resolver::MapImageResolver;
pub use records::{PolicyCard, YearRecord, YearSeries, policy_badge_label};
pub use scale::LinearScale;
pub use scroll::{compute_scroll_fraction, derive_active_year, year_index_from_fraction};
pub use types::{ContainerRect, ScrollMetrics, Viewport};
