use crate::InferError;
use percept_base::Tensor;
use std::collections::HashMap;

/// A loaded model ready to run: named f32 tensors in, named f32 tensors out.
pub trait Session {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError>;
    fn input_names(&self) -> &[String];
    fn output_names(&self) -> &[String];
}
