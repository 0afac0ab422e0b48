/// How neighbourhood operations read pixels that fall outside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderMode {
    /// Repeat the nearest edge pixel: `aaa|abcd|ddd`.
    Clamp,
    /// Mirror without repeating the edge pixel: `dcb|abcd|cba`.
    Reflect101,
}

/// Maps a possibly out-of-range index into `[0, len)`.
///
/// Returns `None` only for `len == 0`.
pub fn map_index(i: isize, len: usize, mode: BorderMode) -> Option<usize> {
    if len == 0 {
        return None;
    }

    match mode {
        BorderMode::Clamp => {
            if i < 0 {
                Some(0)
            } else {
                Some((i as usize).min(len - 1))
            }
        }
        BorderMode::Reflect101 => {
            if len == 1 {
                return Some(0);
            }

            let period = (2 * len - 2) as isize;
            let r = i.rem_euclid(period) as usize;
            if r < len {
                Some(r)
            } else {
                Some(period as usize - r)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BorderMode, map_index};

    #[test]
    fn empty_axis_has_no_mapping() {
        assert_eq!(map_index(0, 0, BorderMode::Clamp), None);
        assert_eq!(map_index(3, 0, BorderMode::Reflect101), None);
    }

    #[test]
    fn clamp_saturates_both_ends() {
        let cases = [(-9, 0), (-1, 0), (0, 0), (2, 2), (3, 3), (4, 3), (40, 3)];
        for (i, expected) in cases {
            assert_eq!(map_index(i, 4, BorderMode::Clamp), Some(expected));
        }
    }

    #[test]
    fn reflect101_mirrors_without_repeating_edge() {
        for i in -5..=5 {
            assert_eq!(map_index(i, 1, BorderMode::Reflect101), Some(0));
        }

        // 0 1 2 3 | 2 1 | 0 1 2 3 ...
        let cases = [
            (-4, 2),
            (-3, 3),
            (-2, 2),
            (-1, 1),
            (0, 0),
            (3, 3),
            (4, 2),
            (5, 1),
            (6, 0),
            (7, 1),
        ];
        for (i, expected) in cases {
            assert_eq!(map_index(i, 4, BorderMode::Reflect101), Some(expected));
        }
    }
}
