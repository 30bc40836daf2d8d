use percept_image::{decode_image, DecodedImage, ImageError};
use image::ImageEncoder;

#[test]
fn test_decode_jpeg_rgb() {
    // Create a small 2x2 RGB JPEG image using the image crate
    let mut buffer = Vec::new();
    let img = image::RgbImage::from_fn(2, 2, |x, y| {
        let val = (x + y) as u8 * 64;
        image::Rgb([val, val + 16, val + 32])
    });

    image::codecs::jpeg::JpegEncoder::new(&mut buffer)
        .encode_image(&img)
        .unwrap();

    let decoded = decode_image(&buffer).unwrap();

    match decoded {
        DecodedImage::U8(ref tensor) => {
            assert_eq!(tensor.shape, vec![2, 2, 3]);
            assert_eq!(decoded.height(), 2);
            assert_eq!(decoded.width(), 2);
            assert_eq!(decoded.channels(), 3);
        }
        _ => panic!("Expected U8 variant"),
    }
}

#[test]
fn test_decode_png_rgba() {
    // Create a 2x2 RGBA PNG
    let mut buffer = Vec::new();
    let img = image::RgbaImage::from_fn(2, 2, |x, y| {
        let val = (x + y) as u8 * 64;
        image::Rgba([val, val + 16, val + 32, 255])
    });

    image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), 2, 2, image::ExtendedColorType::Rgba8)
        .unwrap();

    let decoded = decode_image(&buffer).unwrap();

    match decoded {
        DecodedImage::U8(ref tensor) => {
            assert_eq!(tensor.shape, vec![2, 2, 4]);
            assert_eq!(decoded.channels(), 4);
        }
        _ => panic!("Expected U8 variant"),
    }
}

#[test]
fn test_decode_png_16bit() {
    // Create a 2x2 16-bit RGB PNG
    let mut buffer = Vec::new();
    let img = image::ImageBuffer::<image::Rgb<u16>, Vec<u16>>::from_fn(2, 2, |x, y| {
        let val = ((x + y) as u16) * 16384;
        image::Rgb([val, val + 4096, val + 8192])
    });

    let raw_bytes: Vec<u8> = img
        .as_raw()
        .iter()
        .flat_map(|&v| v.to_be_bytes())
        .collect();

    image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(&raw_bytes, 2, 2, image::ExtendedColorType::Rgb16)
        .unwrap();

    let decoded = decode_image(&buffer).unwrap();

    match decoded {
        DecodedImage::U16(ref tensor) => {
            assert_eq!(tensor.shape, vec![2, 2, 3]);
        }
        _ => panic!("Expected U16 variant"),
    }
}

#[test]
fn test_decode_garbage_returns_error() {
    let garbage = [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01, 0x02];
    let result = decode_image(&garbage);

    match result {
        Err(ImageError::Decode(_)) => {}
        other => panic!("Expected ImageError::Decode, got {:?}", other),
    }
}

#[test]
fn test_decode_empty_input_returns_error() {
    assert!(decode_image(&[]).is_err());
}
