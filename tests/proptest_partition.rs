use mosaicprep::grid::partition;
use mosaicprep::manifest::build_manifest;
use proptest::prelude::*;

/// Grids whose remainder row would be empty: heights in
/// `(divisions*(win-1), (divisions-1)*win]` for some window `win < divisions`.
fn arb_empty_remainder_grid() -> impl Strategy<Value = (u32, u32)> {
    (2u32..12).prop_flat_map(|divisions| {
        (1u32..divisions).prop_flat_map(move |win| {
            (0u32..(divisions - win))
                .prop_map(move |offset| (divisions * (win - 1) + 1 + offset, divisions))
        })
    })
}

proptest! {
    #[test]
    fn regions_cover_every_pixel_exactly_once(
        height in 1u32..400,
        divisions in 1u32..12,
        extra_width in 0u32..60,
    ) {
        let win = height.div_ceil(divisions);
        let end = (divisions - 1) * win;
        prop_assume!(height > end);
        // Any width beyond the row-derived grid extent is valid; the last
        // column absorbs the remainder.
        let width = end + 1 + extra_width;

        let regions = partition(height, width, divisions).expect("valid grid");
        prop_assert_eq!(regions.len(), (divisions as usize).pow(2));

        let mut covered = vec![0u32; (height * width) as usize];
        for region in &regions {
            prop_assert!(region.row_start < region.row_end);
            prop_assert!(region.col_start < region.col_end);
            prop_assert!(region.row_end <= height);
            prop_assert!(region.col_end <= width);
            for row in region.row_start..region.row_end {
                for col in region.col_start..region.col_end {
                    covered[(row * width + col) as usize] += 1;
                }
            }
        }
        prop_assert!(covered.iter().all(|&count| count == 1));
    }

    #[test]
    fn regions_are_emitted_row_major(
        height in 1u32..400,
        divisions in 1u32..12,
    ) {
        let win = height.div_ceil(divisions);
        let end = (divisions - 1) * win;
        prop_assume!(height > end);

        let regions = partition(height, height, divisions).expect("valid grid");
        for pair in regions.windows(2) {
            let order = (pair[0].row_start, pair[0].col_start)
                < (pair[1].row_start, pair[1].col_start);
            prop_assert!(order, "regions out of row-major order: {:?}", pair);
        }
    }

    #[test]
    fn partition_is_deterministic(
        height in 1u32..400,
        divisions in 1u32..12,
    ) {
        let win = height.div_ceil(divisions);
        let end = (divisions - 1) * win;
        prop_assume!(height > end);

        let first = partition(height, height, divisions).expect("valid grid");
        let second = partition(height, height, divisions).expect("valid grid");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn empty_remainder_grids_are_rejected(
        (height, divisions) in arb_empty_remainder_grid(),
    ) {
        let win = height.div_ceil(divisions);
        let end = (divisions - 1) * win;
        prop_assert!(height <= end, "bad generator: {} > {}", height, end);

        prop_assert!(partition(height, height, divisions).is_err());
    }

    #[test]
    fn manifest_urls_match_region_count(
        height in 1u32..400,
        divisions in 1u32..12,
        label_count in 0usize..8,
    ) {
        let win = height.div_ceil(divisions);
        let end = (divisions - 1) * win;
        prop_assume!(height > end);

        let regions = partition(height, height, divisions).expect("valid grid");
        let labels: Vec<String> = (0..label_count).map(|i| format!("species {}", i)).collect();
        let manifest = build_manifest(labels.clone(), &regions, "img", "ann");

        prop_assert_eq!(manifest.labels, labels);
        prop_assert_eq!(manifest.image_urls.len(), regions.len());
        prop_assert_eq!(manifest.annotation_urls.len(), regions.len());

        // URLs are unique and index-ordered
        for (index, url) in manifest.image_urls.iter().enumerate() {
            prop_assert_eq!(url, &format!("img/{:03}.png", index));
        }
    }
}
