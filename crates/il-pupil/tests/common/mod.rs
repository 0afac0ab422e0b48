#![allow(dead_code)]

use il_core::Image;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct Disk {
    pub cx: i64,
    pub cy: i64,
    pub r: i64,
    pub value: u8,
}

/// Uniform background with filled disks painted in order.
pub fn disks(width: usize, height: usize, background: u8, disks: &[Disk]) -> Image<u8> {
    let mut data = vec![background; width * height];
    for y in 0..height {
        for x in 0..width {
            for d in disks {
                let dx = x as i64 - d.cx;
                let dy = y as i64 - d.cy;
                if dx * dx + dy * dy <= d.r * d.r {
                    data[y * width + x] = d.value;
                }
            }
        }
    }
    Image::from_vec(width, height, data).expect("valid image")
}

pub fn disk(width: usize, height: usize, cx: i64, cy: i64, r: i64) -> Image<u8> {
    disks(
        width,
        height,
        128,
        &[Disk {
            cx,
            cy,
            r,
            value: 0,
        }],
    )
}

/// Dark disk on a textured background, deterministic.
pub fn noisy_disk(width: usize, height: usize, cx: i64, cy: i64, r: i64, seed: u32) -> Image<u8> {
    let mut img = disk(width, height, cx, cy, r);
    let mut state = seed.max(1);
    for v in img.data_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let jitter = (state % 41) as i32 - 20;
        *v = (*v as i32 + jitter).clamp(0, 255) as u8;
    }
    img
}
