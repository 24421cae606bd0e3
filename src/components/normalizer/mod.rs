mod actor;
mod handle;
pub mod source;
pub mod state;

pub use actor::{NormalizerActor, NormalizerActorHandle, NormalizerCommand};
pub use handle::NormalizerHandle;
pub use source::{load_workbook, FileWorkbook, MemoryWorkbook, RemoteWorkbook, WorkbookSource};
pub use state::{NormalizedData, NormalizerState};
