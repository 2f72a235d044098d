//! Long-running method classification.

use prost_types::MethodDescriptorProto;

/// Output type that marks a method as long-running by convention.
pub const LONG_RUNNING_OPERATION: &str = ".google.longrunning.Operation";

/// Decides whether a method returns a long-running operation handle.
pub trait MethodClassifier {
    fn is_long_running(&self, method: &MethodDescriptorProto) -> bool;
}

/// Matches the method's output type against a fixed marker type name.
#[derive(Debug, Clone)]
pub struct OutputTypeMarker {
    marker: String,
}

impl OutputTypeMarker {
    pub fn new(marker: impl Into<String>) -> Self {
        Self { marker: marker.into() }
    }
}

impl Default for OutputTypeMarker {
    fn default() -> Self {
        Self::new(LONG_RUNNING_OPERATION)
    }
}

impl MethodClassifier for OutputTypeMarker {
    fn is_long_running(&self, method: &MethodDescriptorProto) -> bool {
        method.output_type() == self.marker
    }
}

impl<F> MethodClassifier for F
where
    F: Fn(&MethodDescriptorProto) -> bool,
{
    fn is_long_running(&self, method: &MethodDescriptorProto) -> bool {
        self(method)
    }
}
