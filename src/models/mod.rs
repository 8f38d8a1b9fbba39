pub mod analysis;
pub mod request;
pub mod response;

pub use analysis::{
    AnalysisResult, AnomalyBreakdown, AnomalyType, RoomReading, SummaryStats, TopAnomalousRoom,
    UsagePatterns,
};
pub use request::{
    days_in_month, AnalysisMode, AnalysisRequest, FormFields, FormSnapshot, Month, RoomType,
    ValidationError,
};
pub use response::{AnalyzeEnvelope, HealthStatus, RoomRow};
