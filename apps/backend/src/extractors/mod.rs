pub mod session_path;
pub mod validated_json;

pub use session_path::SessionPath;
pub use validated_json::ValidatedJson;
