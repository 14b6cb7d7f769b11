#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use antpack::entities::{Instance, ItemSet, Layout};
    use antpack::fitness::fitness;
    use antpack::geometry::geo_traits::Shape;
    use antpack::geometry::{BinSize, Rectangle, overlaps};
    use antpack::io::ext_repr::{ExtBin, ExtInstance, ExtItem};
    use antpack::placement::find_position;
    use antpack::util::assertions::layout_is_valid;
    use antpack::{io, util};
    use itertools::Itertools;
    use test_case::test_case;

    fn rect(x: u32, y: u32, width: u32, height: u32) -> Rectangle {
        Rectangle::new(0, width, height).at(x, y)
    }

    #[test_case(rect(0, 0, 2, 2), rect(2, 0, 2, 2), false; "touching right edge")]
    #[test_case(rect(0, 0, 2, 2), rect(0, 2, 2, 2), false; "touching top edge")]
    #[test_case(rect(0, 0, 2, 2), rect(2, 2, 2, 2), false; "touching corner")]
    #[test_case(rect(0, 0, 2, 2), rect(1, 1, 2, 2), true; "partial overlap")]
    #[test_case(rect(0, 0, 4, 4), rect(1, 1, 1, 1), true; "enclosed")]
    #[test_case(rect(0, 0, 1, 5), rect(5, 0, 1, 5), false; "far apart")]
    #[test_case(rect(0, 1, 5, 1), rect(2, 0, 1, 3), true; "crossing")]
    fn overlap_is_symmetric(a: Rectangle, b: Rectangle, expected: bool) {
        assert_eq!(overlaps(&a, &b), expected);
        assert_eq!(overlaps(&b, &a), expected);
    }

    #[test]
    fn rotating_twice_is_identity() {
        let original = Rectangle::new(3, 5, 2);
        let mut r = original;
        r.rotate();
        assert_eq!((r.width, r.height, r.rotated), (2, 5, true));
        r.rotate();
        assert_eq!(r, original);
    }

    #[test]
    fn item_set_is_sorted_by_descending_area_and_stable() {
        let items = ItemSet::new([(1, 1), (2, 3), (3, 2), (4, 4), (1, 2)]);
        let dims = items
            .items()
            .iter()
            .map(|i| (i.width, i.height))
            .collect_vec();
        assert_eq!(dims, vec![(4, 4), (2, 3), (3, 2), (1, 2), (1, 1)]);
        assert!(util::assertions::item_ids_correct(items.items()));
        assert_eq!(items.total_area(), 16 + 6 + 6 + 2 + 1);
    }

    #[test]
    fn empty_layout_places_at_origin() {
        let bin = BinSize::new(10, 10);
        let mut candidate = Rectangle::new(0, 3, 4);
        assert_eq!(find_position(&[], &mut candidate, &bin), Some((0, 0)));
        assert!(!candidate.rotated);
    }

    #[test]
    fn placement_prefers_lowest_x_then_lowest_y() {
        let bin = BinSize::new(10, 10);
        let packed = vec![rect(0, 0, 2, 3)];
        let mut candidate = Rectangle::new(1, 2, 2);
        // column x = 0 is free above the first rectangle
        assert_eq!(find_position(&packed, &mut candidate, &bin), Some((0, 3)));

        let packed = vec![rect(0, 0, 2, 9)];
        let mut candidate = Rectangle::new(1, 2, 2);
        assert_eq!(find_position(&packed, &mut candidate, &bin), Some((2, 0)));
    }

    #[test]
    fn placement_falls_back_to_rotation() {
        let bin = BinSize::new(5, 3);
        let packed = vec![rect(0, 0, 3, 3)];
        // 3x2 does not fit next to the blocker, 2x3 does
        let mut candidate = Rectangle::new(1, 3, 2);
        assert_eq!(find_position(&packed, &mut candidate, &bin), Some((3, 0)));
        assert!(candidate.rotated);
        assert_eq!((candidate.width, candidate.height), (2, 3));
    }

    #[test]
    fn failed_placement_restores_orientation() {
        let bin = BinSize::new(21, 21);
        let mut candidate = Rectangle::new(0, 30, 2);
        assert_eq!(find_position(&[], &mut candidate, &bin), None);
        assert_eq!(candidate, Rectangle::new(0, 30, 2));

        let packed = vec![rect(0, 0, 4, 4)];
        let bin = BinSize::new(4, 4);
        let mut candidate = Rectangle::new(1, 1, 2);
        assert_eq!(find_position(&packed, &mut candidate, &bin), None);
        assert!(!candidate.rotated);
    }

    #[test_case(21, 21, &[(4, 4); 25]; "grid of squares")]
    #[test_case(21, 21, &[(4, 3), (2, 5), (1, 7), (3, 3), (6, 1), (2, 2), (4, 4), (5, 2)]; "mixed")]
    #[test_case(7, 5, &[(3, 2), (3, 2), (3, 2), (3, 2), (3, 2), (3, 2), (1, 1)]; "crowded")]
    fn layouts_never_overlap(bin_w: u32, bin_h: u32, dims: &[(u32, u32)]) {
        let bin = BinSize::new(bin_w, bin_h);
        let items = ItemSet::new(dims.iter().copied());
        let mut layout = Layout::new(bin);
        for item in items.items() {
            let _ = layout.try_place(Rectangle::from_item(item));
        }
        assert!(layout_is_valid(layout.packed(), &bin));
        for (a, b) in layout.packed().iter().tuple_combinations() {
            assert!(!overlaps(a, b));
        }
    }

    #[test]
    fn layout_reports_density() {
        let bin = BinSize::new(4, 4);
        let mut layout = Layout::new(bin);
        assert!(layout.try_place(Rectangle::new(0, 2, 4)).is_some());
        assert!(layout.try_place(Rectangle::new(1, 4, 2)).is_some());
        assert_eq!(layout.packed_area(), 16);
        assert_eq!(layout.density(), 1.0);
        assert!(layout.try_place(Rectangle::new(2, 1, 1)).is_none());
    }

    #[test]
    fn fitness_of_perfect_tiling_is_zero() {
        let bin = BinSize::new(4, 4);
        let packed = vec![rect(0, 0, 2, 4), rect(2, 0, 2, 4)];
        assert_eq!(fitness(&packed, &[], &bin), 0.0);
    }

    #[test]
    fn fitness_penalizes_waste_and_unplaced_items() {
        let bin = BinSize::new(21, 21);
        let packed = vec![rect(0, 0, 4, 4)];
        let unplaced = vec![Rectangle::new(1, 30, 2)];
        assert_eq!(fitness(&packed, &[], &bin), (441 - 16) as f64);
        assert_eq!(fitness(&packed, &unplaced, &bin), (441 - 16 + 60) as f64);
        assert_eq!(fitness(&[], &unplaced, &bin), (441 + 60) as f64);
        assert!(fitness(&[], &[], &bin) >= 0.0);
    }

    #[test]
    fn import_expands_demand() {
        let ext = ExtInstance {
            name: "demand".to_string(),
            bin: ExtBin {
                width: 10,
                height: 10,
            },
            items: vec![
                ExtItem {
                    width: 1,
                    height: 1,
                    demand: 3,
                },
                ExtItem {
                    width: 2,
                    height: 2,
                    demand: 1,
                },
            ],
        };
        let instance = io::import(&ext).unwrap();
        assert_eq!(instance.items.len(), 4);
        assert_eq!(instance.items.item(0).area(), 4);
        assert_eq!(instance.fitness_lower_bound(), (100 - 7) as f64);

        let exported = io::export_instance(&instance);
        assert_eq!(exported.items.len(), 4);
        assert!(exported.items.iter().all(|i| i.demand == 1));
    }

    #[test_case(0, 10, 1, 1; "zero bin width")]
    #[test_case(10, 10, 0, 1; "zero item width")]
    #[test_case(10, 10, 1, 0; "zero item height")]
    fn import_rejects_invalid_dimensions(bin_w: u32, bin_h: u32, item_w: u32, item_h: u32) {
        let ext = ExtInstance {
            name: "invalid".to_string(),
            bin: ExtBin {
                width: bin_w,
                height: bin_h,
            },
            items: vec![ExtItem {
                width: item_w,
                height: item_h,
                demand: 1,
            }],
        };
        assert!(io::import(&ext).is_err());
    }

    #[test]
    fn import_rejects_empty_instance() {
        let json = r#"{"name": "empty", "bin": {"width": 5, "height": 5}, "items": []}"#;
        let ext: ExtInstance = serde_json::from_str(json).unwrap();
        assert!(io::import(&ext).is_err());
    }

    #[test]
    fn export_measures_run_time_up_to_time_stamp() {
        let instance = Instance::new("export", ItemSet::new([(2, 2), (9, 1)]), BinSize::new(4, 4));
        let packed = vec![Rectangle::new(1, 2, 2)];
        let unplaced = vec![Rectangle::new(0, 9, 1)];
        let epoch = Instant::now();
        let sol = io::export(&instance, &packed, &unplaced, epoch + Duration::from_secs(3), epoch);

        assert_eq!(sol.run_time_sec, 3);
        assert_eq!(sol.fitness, (16 - 4 + 9) as f64);
        assert_eq!(sol.packed.len(), 1);
        assert_eq!(sol.unplaced[0].width, 9);
    }
}
