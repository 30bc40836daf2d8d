use percept_base::Tensor;
use percept_image::DecodedImage;

#[test]
fn test_u8_accessors() {
    let tensor = Tensor::new(vec![4, 6, 3], vec![0u8; 72]).unwrap();
    let decoded = DecodedImage::U8(tensor);

    assert_eq!(decoded.shape(), &[4, 6, 3]);
    assert_eq!(decoded.height(), 4);
    assert_eq!(decoded.width(), 6);
    assert_eq!(decoded.channels(), 3);
}

#[test]
fn test_u16_accessors() {
    let tensor = Tensor::new(vec![2, 3, 1], vec![0u16; 6]).unwrap();
    let decoded = DecodedImage::U16(tensor);

    assert_eq!(decoded.height(), 2);
    assert_eq!(decoded.width(), 3);
    assert_eq!(decoded.channels(), 1);
}

#[test]
fn test_f32_accessors() {
    let tensor = Tensor::new(vec![1, 2, 4], vec![0.0f32; 8]).unwrap();
    let decoded = DecodedImage::F32(tensor);

    assert_eq!(decoded.height(), 1);
    assert_eq!(decoded.width(), 2);
    assert_eq!(decoded.channels(), 4);
}
