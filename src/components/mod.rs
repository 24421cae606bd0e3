// Export components
pub mod appointments;
pub mod diagnostics;
pub mod normalizer;
pub mod payroll;
pub mod workbook;

// Re-export the normalizer handle
pub use normalizer::NormalizerHandle;
