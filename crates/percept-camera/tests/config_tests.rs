use percept_camera::CameraConfig;

#[test]
fn test_default_config() {
    let config = CameraConfig::default();
    assert_eq!(config.device(), "/dev/video0");
    assert_eq!(config.width(), 640);
    assert_eq!(config.height(), 480);
    assert_eq!(config.fps(), 30);
    assert_eq!(config.buffer_count(), 4);
}

#[test]
fn test_builder_chain() {
    let config = CameraConfig::default()
        .with_device("/dev/video2".to_string())
        .with_width(1280)
        .with_height(720)
        .with_fps(60)
        .with_buffer_count(8);

    assert_eq!(config.device(), "/dev/video2");
    assert_eq!(config.width(), 1280);
    assert_eq!(config.height(), 720);
    assert_eq!(config.fps(), 60);
    assert_eq!(config.buffer_count(), 8);
}
