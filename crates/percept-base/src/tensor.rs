use std::fmt;

#[derive(Debug, PartialEq)]
pub enum TensorError {
    ShapeOverflow,
    ShapeMismatch { expected: usize, got: usize },
}

impl fmt::Display for TensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TensorError::ShapeOverflow => write!(f, "shape dimensions overflow when multiplied"),
            TensorError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected} elements, got {got}")
            }
        }
    }
}

impl std::error::Error for TensorError {}

/// Dense n-dimensional array with row-major data.
///
/// Images use HWC layout: `[height, width, channels]`.
#[derive(Clone, PartialEq)]
pub struct Tensor<T> {
    pub shape: Vec<usize>,
    pub data: Vec<T>,
}

impl<T: fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("data", &self.data)
            .finish()
    }
}

fn shape_product(shape: &[usize]) -> Result<usize, TensorError> {
    let mut product: usize = 1;
    for &dim in shape {
        product = product.checked_mul(dim).ok_or(TensorError::ShapeOverflow)?;
    }
    Ok(product)
}

impl<T> Tensor<T> {
    /// Create a tensor, validating that the shape product matches the data length.
    pub fn new(shape: Vec<usize>, data: Vec<T>) -> Result<Self, TensorError> {
        let product = shape_product(&shape)?;
        if product != data.len() {
            return Err(TensorError::ShapeMismatch {
                expected: product,
                got: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    pub fn from_scalar(value: T) -> Self {
        Self {
            shape: vec![],
            data: vec![value],
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Default + Clone> Tensor<T> {
    pub fn zeros(shape: Vec<usize>) -> Result<Self, TensorError> {
        let product = shape_product(&shape)?;
        let data = vec![T::default(); product];
        Ok(Self { shape, data })
    }
}
