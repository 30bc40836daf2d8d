use percept_infer::Detection;

/// Box color for person detections
pub const PERSON_COLOR: [u8; 3] = [0, 255, 0];
/// Box color for everything else
pub const OTHER_COLOR: [u8; 3] = [255, 255, 0];

/// Draw a line using Bresenham's algorithm with clipping
pub fn draw_line(
    buf: &mut [u8],
    width: usize,
    height: usize,
    mut x0: i32,
    mut y0: i32,
    mut x1: i32,
    mut y1: i32,
    color: [u8; 3],
) {
    // Cohen-Sutherland line clipping to bounds
    loop {
        let outcode0 = compute_outcode(x0, y0, width as i32, height as i32);
        let outcode1 = compute_outcode(x1, y1, width as i32, height as i32);

        if (outcode0 | outcode1) == 0 {
            // Both points inside — proceed to draw
            break;
        } else if (outcode0 & outcode1) != 0 {
            // Both points outside same edge — line completely clipped
            return;
        } else {
            // Line crosses bounds — clip it
            let outcode = if outcode0 != 0 { outcode0 } else { outcode1 };
            let (x, y) = clip_point(x0, y0, x1, y1, outcode, width as i32, height as i32);

            if outcode == outcode0 {
                x0 = x;
                y0 = y;
            } else {
                x1 = x;
                y1 = y;
            }
        }
    }

    // Bresenham line drawing
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        set_pixel(buf, width, x0 as usize, y0 as usize, color);

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw a rectangle outline
pub fn draw_rect(
    buf: &mut [u8],
    width: usize,
    height: usize,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: [u8; 3],
) {
    draw_line(buf, width, height, x0, y0, x1, y0, color);
    draw_line(buf, width, height, x1, y1, x0, y1, color);
    draw_line(buf, width, height, x0, y0, x0, y1, color);
    draw_line(buf, width, height, x1, y0, x1, y1, color);
}

/// Draw detection overlays on an RGB buffer
///
/// Each detection gets a two-pixel box outline; persons are green, other
/// classes yellow.
pub fn draw_detections(buf: &mut [u8], width: usize, height: usize, detections: &[Detection]) {
    for detection in detections {
        let color = if detection.is_person() {
            PERSON_COLOR
        } else {
            OTHER_COLOR
        };

        let x0 = detection.bbox.origin.x as i32;
        let y0 = detection.bbox.origin.y as i32;
        let x1 = (detection.bbox.origin.x + detection.bbox.size.x) as i32;
        let y1 = (detection.bbox.origin.y + detection.bbox.size.y) as i32;

        // Two nested outlines for visibility
        draw_rect(buf, width, height, x0, y0, x1, y1, color);
        draw_rect(buf, width, height, x0 + 1, y0 + 1, x1 - 1, y1 - 1, color);
    }
}

/// Convert HWC RGB buffer to packed ARGB u32 for minifb
pub fn rgb_to_argb(buf: &[u8], width: usize, height: usize) -> Vec<u32> {
    debug_assert!(
        buf.len() >= width * height * 3,
        "RGB buffer too small: expected {} bytes, got {}",
        width * height * 3,
        buf.len()
    );
    let mut argb = Vec::with_capacity(width * height);
    for i in 0..width * height {
        let idx = i * 3;
        let r = buf[idx] as u32;
        let g = buf[idx + 1] as u32;
        let b = buf[idx + 2] as u32;
        argb.push((r << 16) | (g << 8) | b);
    }
    argb
}

// Helper functions

fn set_pixel(buf: &mut [u8], width: usize, x: usize, y: usize, color: [u8; 3]) {
    let idx = (y * width + x) * 3;
    buf[idx] = color[0];
    buf[idx + 1] = color[1];
    buf[idx + 2] = color[2];
}

// Cohen-Sutherland clipping helpers
const INSIDE: u8 = 0; // 0000
const LEFT: u8 = 1; // 0001
const RIGHT: u8 = 2; // 0010
const BOTTOM: u8 = 4; // 0100
const TOP: u8 = 8; // 1000

fn compute_outcode(x: i32, y: i32, width: i32, height: i32) -> u8 {
    let mut code = INSIDE;
    if x < 0 {
        code |= LEFT;
    } else if x >= width {
        code |= RIGHT;
    }
    if y < 0 {
        code |= TOP;
    } else if y >= height {
        code |= BOTTOM;
    }
    code
}

fn clip_point(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    outcode: u8,
    width: i32,
    height: i32,
) -> (i32, i32) {
    let dx = x1 - x0;
    let dy = y1 - y0;

    if outcode & TOP != 0 {
        // Point is above y=0
        let x = x0 + dx * (0 - y0) / dy;
        (x, 0)
    } else if outcode & BOTTOM != 0 {
        // Point is below y=height-1
        let x = x0 + dx * (height - 1 - y0) / dy;
        (x, height - 1)
    } else if outcode & LEFT != 0 {
        // Point is left of x=0
        let y = y0 + dy * (0 - x0) / dx;
        (0, y)
    } else {
        // Point is right of x=width-1
        let y = y0 + dy * (width - 1 - x0) / dx;
        (width - 1, y)
    }
}
