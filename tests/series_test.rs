use catfreq::series::Series;

#[test]
fn test_series_creation() {
    // Integer series creation
    let series = Series::new(vec![1, 2, 3, 4, 5], Some("test".to_string())).unwrap();
    assert_eq!(series.len(), 5);
    assert_eq!(series.name(), Some(&"test".to_string()));
    assert_eq!(series.get(0), Some(&1));
    assert_eq!(series.get(4), Some(&5));
    assert_eq!(series.get(5), None);
}

#[test]
fn test_series_numeric_operations() {
    let series = Series::new(vec![10, 20, 30, 40, 50], Some("numbers".to_string())).unwrap();

    // Sum
    assert_eq!(series.sum(), 150);

    // Mean
    assert_eq!(series.mean().unwrap(), 30);

    // Minimum
    assert_eq!(series.min().unwrap(), 10);

    // Maximum
    assert_eq!(series.max().unwrap(), 50);
}

#[test]
fn test_empty_series() {
    let empty_series: Series<i32> = Series::new(vec![], Some("empty".to_string())).unwrap();

    assert_eq!(empty_series.len(), 0);
    assert!(empty_series.is_empty());

    // The sum of an empty series is 0 (the default value)
    assert_eq!(empty_series.sum(), 0);

    // Statistics over an empty series are errors
    assert!(empty_series.mean().is_err());
    assert!(empty_series.min().is_err());
    assert!(empty_series.max().is_err());
}

#[test]
fn test_series_with_strings() {
    let series = Series::new(
        vec![
            "apple".to_string(),
            "banana".to_string(),
            "cherry".to_string(),
        ],
        Some("fruits".to_string()),
    )
    .unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(series.name(), Some(&"fruits".to_string()));
    assert_eq!(series.get(0), Some(&"apple".to_string()));
}

#[test]
fn test_series_with_name() {
    let series = Series::new(vec![1.0, 2.0], None).unwrap();
    assert_eq!(series.name(), None);

    let named = series.with_name("renamed".to_string());
    assert_eq!(named.name(), Some(&"renamed".to_string()));
}
