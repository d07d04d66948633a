//! Well-known metadata keys

/// Request path of a controller (root path) or of a handler member.
pub const PATH: &str = "path";

/// Request method of a handler member.
pub const METHOD: &str = "method";

/// Callable registered for a controller member.
pub const HANDLER: &str = "handler";

/// List of property names that must be present on an instance.
pub const REQUIRED: &str = "trellis:required";

/// Expected value kind of a property.
pub const VALUE_KIND: &str = "trellis:value_kind";
