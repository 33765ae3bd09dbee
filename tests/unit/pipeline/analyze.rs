//! Tests for the color analysis workflow

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use logokit::LogoError;
    use logokit::color::classify::ColorFamily;
    use logokit::io::image::save_png;
    use logokit::pipeline::analyze::analyze_logo;
    use tempfile::TempDir;

    // Tests background pixels are skipped and colors ranked by count
    // Verified by counting near-white pixels as colors
    #[test]
    fn test_analyze_logo_ranking() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logo.png");

        let mut image = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
        for x in 0..6 {
            image.put_pixel(x, 0, Rgba([31, 71, 136, 255]));
        }
        for x in 0..4 {
            image.put_pixel(x, 1, Rgba([217, 119, 87, 255]));
        }
        save_png(&image, &path).unwrap();

        let analysis = analyze_logo(&path).unwrap();

        assert_eq!(analysis.total_pixels, 100);
        assert_eq!(analysis.background_pixels, 90);
        assert_eq!(analysis.distinct_colors, 2);
        assert_eq!(analysis.top_colors.len(), 2);
        assert_eq!(analysis.top_colors[0].hex, "#1F4788");
        assert_eq!(analysis.top_colors[0].count, 6);
        assert_eq!(analysis.top_colors[0].family, ColorFamily::Blue);
        assert_eq!(analysis.top_colors[1].rank, 2);
        // #D97757 counts as a saturated red and stays out of the tone buckets
        assert!(analysis.tones.warm.is_empty());
        assert_eq!(analysis.tones.cool.len(), 1);
        assert!(analysis.tones.neutral.is_empty());
    }

    // Tests alpha is dropped before counting
    // Verified by analyzing the RGBA data directly
    #[test]
    fn test_analyze_logo_ignores_alpha() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logo.png");

        let mut image = RgbaImage::from_pixel(4, 1, Rgba([40, 40, 40, 0]));
        image.put_pixel(0, 0, Rgba([40, 40, 40, 255]));
        save_png(&image, &path).unwrap();

        let analysis = analyze_logo(&path).unwrap();

        assert_eq!(analysis.distinct_colors, 1);
        assert_eq!(analysis.top_colors[0].count, 4);
    }

    // Tests an all-white image yields an empty ranking
    // Verified by failing on empty frequency tables
    #[test]
    fn test_analyze_logo_all_background() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blank.png");
        save_png(&RgbaImage::from_pixel(5, 5, Rgba([250, 250, 250, 255])), &path).unwrap();

        let analysis = analyze_logo(&path).unwrap();

        assert_eq!(analysis.background_pixels, 25);
        assert!(analysis.top_colors.is_empty());
        assert!(analysis.tones.warm.is_empty());
    }

    // Tests a missing input surfaces a load error
    // Verified by returning an empty analysis on failure
    #[test]
    fn test_analyze_logo_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = analyze_logo(&temp_dir.path().join("missing.png"));

        assert!(matches!(result, Err(LogoError::ImageLoad { .. })));
    }
}
