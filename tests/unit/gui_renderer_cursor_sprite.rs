use super::*;

#[test]
fn transparent_and_empty_sprites_are_skipped() {
    assert!(rasterize(CursorImage::Transparent, 24).is_none());
    assert!(rasterize(CursorImage::Horizontal, 0).is_none());
}

#[test]
fn every_arrow_covers_the_center() {
    for image in [
        CursorImage::Horizontal,
        CursorImage::Vertical,
        CursorImage::DiagonalNwse,
        CursorImage::DiagonalNesw,
    ] {
        let sprite = rasterize(image, 24).unwrap();
        assert_eq!(sprite.fill_at(12, 12), 255, "{image:?}");
        assert_eq!(sprite.fill.len(), 24 * 24);
    }
}

#[test]
fn horizontal_arrow_leaves_top_and_bottom_rows_empty() {
    let sprite = rasterize(CursorImage::Horizontal, 24).unwrap();
    assert!((0..24).all(|x| sprite.outline_at(x, 0) == 0));
    assert!((0..24).all(|x| sprite.outline_at(x, 23) == 0));
}

#[test]
fn diagonals_run_through_opposite_corners() {
    let nwse = rasterize(CursorImage::DiagonalNwse, 32).unwrap();
    let nesw = rasterize(CursorImage::DiagonalNesw, 32).unwrap();

    assert!(nwse.fill_at(5, 5) > 0);
    assert_eq!(nwse.fill_at(26, 5), 0);
    assert!(nesw.fill_at(26, 5) > 0);
    assert_eq!(nesw.fill_at(5, 5), 0);
}

#[test]
fn outline_encloses_fill() {
    let sprite = rasterize(CursorImage::Vertical, 20).unwrap();
    for (fill, outline) in sprite.fill.iter().zip(&sprite.outline) {
        assert!(outline >= fill);
    }
}

#[test]
fn out_of_range_lookups_are_empty() {
    let sprite = rasterize(CursorImage::Vertical, 8).unwrap();
    assert_eq!(sprite.fill_at(8, 8), 0);
    assert_eq!(sprite.outline_at(100, 0), 0);
}
