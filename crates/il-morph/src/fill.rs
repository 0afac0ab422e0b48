use il_core::{Error, Image, ImageView, ImageViewMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// Axis-aligned neighbours only.
    Four,
    /// Includes diagonals.
    Eight,
}

impl Connectivity {
    fn neighbours(self) -> &'static [(isize, isize)] {
        match self {
            Self::Four => &[(1, 0), (-1, 0), (0, 1), (0, -1)],
            Self::Eight => &[
                (1, 0),
                (-1, 0),
                (0, 1),
                (0, -1),
                (1, 1),
                (1, -1),
                (-1, 1),
                (-1, -1),
            ],
        }
    }
}

/// Replaces the connected region of pixels equal to the seed value with
/// `new_value`. Returns the number of pixels changed.
pub fn flood_fill_u8(
    img: &mut ImageViewMut<'_, u8>,
    seed: (usize, usize),
    new_value: u8,
    connectivity: Connectivity,
) -> Result<usize, Error> {
    let target = *img.get(seed.0, seed.1).ok_or(Error::OutOfBounds)?;
    if target == new_value {
        return Ok(0);
    }

    let w = img.width() as isize;
    let h = img.height() as isize;
    let mut stack = vec![seed];
    *img.get_mut(seed.0, seed.1).ok_or(Error::OutOfBounds)? = new_value;
    let mut filled = 1;

    while let Some((x, y)) = stack.pop() {
        for &(dx, dy) in connectivity.neighbours() {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || ny < 0 || nx >= w || ny >= h {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if let Some(px) = img.get_mut(nx, ny)
                && *px == target
            {
                *px = new_value;
                filled += 1;
                stack.push((nx, ny));
            }
        }
    }

    Ok(filled)
}

/// Erases bright blobs that are not 4-connected to the image border.
///
/// Input is expected to be binary `{0, 255}`. Foreground reachable from the
/// border is kept; enclosed foreground (e.g. a specular reflection inside a
/// dark pupil) becomes `0`. The input is not modified.
pub fn fill_holes_u8(src: &ImageView<'_, u8>) -> Image<u8> {
    if src.is_empty() {
        return src.to_image();
    }

    let w = src.width();
    let h = src.height();
    let mut mask = src.to_image();
    {
        let mut view = mask.as_view_mut();
        view.row_mut(0).fill(255);
        view.row_mut(h - 1).fill(255);
        for y in 0..h {
            let row = view.row_mut(y);
            row[0] = 255;
            row[w - 1] = 255;
        }
        flood_fill_u8(&mut view, (0, 0), 0, Connectivity::Four)
            .expect("seed (0, 0) lies inside a non-empty image");
    }

    // Whatever is still set in `mask` is enclosed foreground.
    let mut out = src.to_image();
    for (o, &m) in out.data_mut().iter_mut().zip(mask.data()) {
        *o &= !m;
    }
    out
}
