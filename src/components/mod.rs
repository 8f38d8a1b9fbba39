pub mod analysis;
pub mod layout;
pub mod notifications;

pub use analysis::{AnalysisForm, ResultsSection};
pub use layout::Layout;
pub use notifications::NotificationArea;
