use crate::{InferError, ModelSource, Session};

/// An inference backend that can turn a model source into a runnable session.
pub trait Backend {
    fn name(&self) -> &str;
    fn load_model(&self, model: ModelSource) -> Result<Box<dyn Session>, InferError>;
}
