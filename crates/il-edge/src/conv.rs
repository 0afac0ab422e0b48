use il_core::{BorderMode, Image, ImageView, map_index};

/// Separable integer correlation: `kx` along rows, then `ky` along columns.
///
/// Both kernels must have odd length. Out-of-range taps are remapped through
/// `border`. Returns an empty image for an empty input.
pub fn correlate_separable_u8(
    src: &ImageView<'_, u8>,
    kx: &[i32],
    ky: &[i32],
    border: BorderMode,
) -> Image<i32> {
    assert!(kx.len() % 2 == 1, "kx length must be odd");
    assert!(ky.len() % 2 == 1, "ky length must be odd");

    let w = src.width();
    let h = src.height();
    let mut out = Image::new_fill(w, h, 0i32);
    if src.is_empty() {
        return out;
    }

    let rx = kx.len() / 2;
    let ry = ky.len() / 2;
    let xlut = border_lut(w, rx, border);
    let ylut = border_lut(h, ry, border);

    let mut tmp = vec![0i32; w * h];
    for y in 0..h {
        let row = src.row(y);
        let dst = &mut tmp[y * w..(y + 1) * w];
        for (x, d) in dst.iter_mut().enumerate() {
            let taps = &xlut[x..x + kx.len()];
            *d = taps
                .iter()
                .zip(kx)
                .map(|(&sx, &k)| k * row[sx] as i32)
                .sum();
        }
    }

    let dst = out.data_mut();
    for y in 0..h {
        let taps = &ylut[y..y + ky.len()];
        for x in 0..w {
            dst[y * w + x] = taps
                .iter()
                .zip(ky)
                .map(|(&sy, &k)| k * tmp[sy * w + x])
                .sum();
        }
    }

    out
}

/// Source index for every tap position `-radius..len + radius`.
fn border_lut(len: usize, radius: usize, border: BorderMode) -> Vec<usize> {
    (0..len + 2 * radius)
        .map(|i| {
            map_index(i as isize - radius as isize, len, border)
                .expect("border lookup on a non-empty axis")
        })
        .collect()
}
