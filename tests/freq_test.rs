use catfreq::{frequency_table, ordinal_frequency_table, DataFrame, Error, Series};

fn frame_of(column: &str, values: &[&str]) -> DataFrame {
    let mut df = DataFrame::new();
    let series = Series::new(
        values.iter().map(|s| s.to_string()).collect(),
        Some(column.to_string()),
    )
    .unwrap();
    df.add_column(column.to_string(), series).unwrap();
    df
}

#[test]
fn test_frequency_table_basic() {
    let df = frame_of("g", &["A", "A", "B"]);

    let table = frequency_table(&df, "g").unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.column(), "g");

    let rows = table.rows();
    assert_eq!(rows[0].category, "A");
    assert_eq!(rows[0].absolute, 2);
    assert!((rows[0].relative - 0.6667).abs() < 1e-10);
    assert!((rows[0].percent - 66.67).abs() < 1e-10);

    assert_eq!(rows[1].category, "B");
    assert_eq!(rows[1].absolute, 1);
    assert!((rows[1].relative - 0.3333).abs() < 1e-10);
    assert!((rows[1].percent - 33.33).abs() < 1e-10);

    // A nominal table carries no cumulative columns
    assert!(table.cumulative().is_none());
    assert!(rows[0].cumulative_absolute.is_none());
}

#[test]
fn test_frequency_table_totals() {
    let df = frame_of(
        "color",
        &["red", "blue", "red", "green", "blue", "red", "green"],
    );

    let table = frequency_table(&df, "color").unwrap();

    // One row per distinct category
    assert_eq!(table.len(), 3);

    // Absolute frequencies sum to the row count
    assert_eq!(table.absolute().sum(), df.row_count());

    // Relative frequencies sum to 1 within rounding tolerance
    let relative_sum: f64 = table.relative().values().iter().sum();
    assert!((relative_sum - 1.0).abs() < 0.0001 * table.len() as f64);
}

#[test]
fn test_frequency_table_sorted_by_label() {
    let df = frame_of("g", &["c", "a", "b", "a"]);

    let table = frequency_table(&df, "g").unwrap();
    assert_eq!(table.categories().values(), &["a", "b", "c"]);
}

#[test]
fn test_frequency_table_single_category() {
    let df = frame_of("g", &["only", "only", "only"]);

    let table = frequency_table(&df, "g").unwrap();

    assert_eq!(table.len(), 1);
    let row = table.row(0).unwrap();
    assert_eq!(row.absolute, 3);
    assert!((row.relative - 1.0).abs() < 1e-10);
    assert!((row.percent - 100.0).abs() < 1e-10);
}

#[test]
fn test_frequency_table_missing_column() {
    let df = frame_of("g", &["A", "B"]);

    let result = frequency_table(&df, "missing");
    assert!(matches!(result, Err(Error::ColumnNotFound(_))));
}

#[test]
fn test_frequency_table_empty_frame() {
    let df = frame_of("g", &[]);

    let result = frequency_table(&df, "g");
    assert!(matches!(result, Err(Error::EmptyData(_))));
}

#[test]
fn test_ordinal_frequency_table_cumulative() {
    let df = frame_of("level", &["1", "1", "2", "2", "2", "3"]);

    let table = ordinal_frequency_table(&df, "level").unwrap();

    let cumulative = table.cumulative().expect("ordinal table has cumulative columns");
    assert_eq!(cumulative.absolute().values(), &[2usize, 5, 6]);

    // Cumulative columns are non-decreasing
    let cum_abs = cumulative.absolute().values();
    assert!(cum_abs.windows(2).all(|w| w[0] <= w[1]));

    // The last cumulative absolute equals the row count and the last
    // cumulative percentage equals 100 up to rounding
    assert_eq!(*cum_abs.last().unwrap(), df.row_count());
    let last_percent = *cumulative.percent().values().last().unwrap();
    assert!((last_percent - 100.0).abs() < 0.01 * table.len() as f64);
}

#[test]
fn test_ordinal_frequency_table_values() {
    let df = frame_of("level", &["1", "1", "2"]);

    let table = ordinal_frequency_table(&df, "level").unwrap();
    let rows = table.rows();

    assert_eq!(rows[0].cumulative_absolute, Some(2));
    assert_eq!(rows[0].cumulative_relative, Some(0.6667));
    assert_eq!(rows[0].cumulative_percent, Some(66.67));
    assert_eq!(rows[1].cumulative_absolute, Some(3));
    assert_eq!(rows[1].cumulative_relative, Some(1.0));
    assert_eq!(rows[1].cumulative_percent, Some(100.0));
}

#[test]
fn test_frequency_table_display() {
    let df = frame_of("g", &["A", "A", "B"]);

    let rendered = frequency_table(&df, "g").unwrap().to_string();
    assert!(rendered.contains("Fa"));
    assert!(rendered.contains("Percent"));
    assert!(rendered.contains("66.67"));

    let ordinal_rendered = ordinal_frequency_table(&df, "g").unwrap().to_string();
    assert!(ordinal_rendered.contains("Facum"));
    assert!(ordinal_rendered.contains("Percenacum"));
}

#[test]
fn test_frequency_row_serialization() {
    let df = frame_of("g", &["A", "A", "B"]);

    let table = frequency_table(&df, "g").unwrap();
    let json = serde_json::to_value(table.rows()).unwrap();

    assert_eq!(json[0]["category"], "A");
    assert_eq!(json[0]["absolute"], 2);
    // Cumulative fields are omitted for nominal tables
    assert!(json[0].get("cumulative_absolute").is_none());

    let ordinal = ordinal_frequency_table(&df, "g").unwrap();
    let ordinal_json = serde_json::to_value(ordinal.rows()).unwrap();
    assert_eq!(ordinal_json[1]["cumulative_absolute"], 3);
}
