//! Tests for benchmark configuration.

use super::*;

#[test]
fn test_defaults_match_standard_suite() {
    let config = BenchConfig::new();
    assert_eq!(
        config.search.sizes,
        vec![1_000, 5_000, 10_000, 50_000, 100_000, 250_000, 500_000]
    );
    assert_eq!(config.search.query_count, 20_000);
    assert_eq!(config.search.present_ratio, 0.5);
    assert_eq!(config.search.distributions.len(), 2);
    assert_eq!(config.rng_stream, RngStream::Shared);
    assert_eq!(config.random_seed, None);
    assert_eq!(config.power.base, 7);
    assert_eq!(config.power.exponents, (0..=23).collect::<Vec<_>>());
    assert_eq!(config.power.warmup, 2_000);
    assert_eq!(config.power.repetitions, 20_000);
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42
        rng_stream = "reseeded"

        [search]
        sizes = [100, 200]
        query_count = 50
        present_ratio = 0.25

        [[search.distributions]]
        type = "uniform"
        max_value = 5000

        [[search.distributions]]
        type = "clustered"
        cluster_width = 10
        outlier_ratio = 0.1

        [power]
        base = 3
        exponents = [1, 2, 3]

        [report]
        csv_output = "out.csv"
    "#;

    let config = BenchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.rng_stream, RngStream::Reseeded);
    assert_eq!(config.search.sizes, vec![100, 200]);
    assert_eq!(config.search.query_count, 50);
    assert_eq!(config.search.present_ratio, 0.25);
    assert_eq!(
        config.search.distributions[0],
        DistributionConfig::Uniform(UniformConfig { max_value: 5000 })
    );
    assert_eq!(
        config.search.distributions[1],
        DistributionConfig::Clustered(ClusteredConfig {
            cluster_width: 10,
            outlier_ratio: 0.1,
            max_value: 1_000_000_000,
        })
    );
    assert_eq!(config.power.base, 3);
    assert_eq!(config.power.repetitions, 20_000);
    assert_eq!(config.report.csv_output, Some(PathBuf::from("out.csv")));
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 7
        search:
          sizes: [10, 20, 30]
          distributions:
            - type: clustered
              cluster_width: 4
        power:
          warmup: 0
    "#;

    let config = BenchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(7));
    assert_eq!(config.search.sizes, vec![10, 20, 30]);
    assert_eq!(config.search.query_count, 20_000);
    assert_eq!(config.search.distributions[0].name(), "clustered");
    assert_eq!(config.power.warmup, 0);
}

#[test]
fn test_builder() {
    let config = BenchConfig::new()
        .with_random_seed(123)
        .with_rng_stream(RngStream::Reseeded)
        .with_sizes([10, 20])
        .with_query_count(99)
        .with_distribution(DistributionConfig::Uniform(UniformConfig::default()));

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.search.sizes, vec![10, 20]);
    assert_eq!(config.search.query_count, 99);
    assert_eq!(config.search.distributions.len(), 1);
}

#[test]
fn test_validation_failures() {
    let cases = [
        BenchConfig::new().with_sizes(Vec::new()),
        BenchConfig::new().with_sizes([10, 0]),
        BenchConfig::new().with_query_count(0),
        BenchConfig::new().with_distribution(DistributionConfig::Uniform(UniformConfig {
            max_value: i64::MAX,
        })),
        BenchConfig::new().with_distribution(DistributionConfig::Clustered(ClusteredConfig {
            cluster_width: 0,
            ..ClusteredConfig::default()
        })),
        BenchConfig::new().with_distribution(DistributionConfig::Clustered(ClusteredConfig {
            outlier_ratio: 1.5,
            ..ClusteredConfig::default()
        })),
    ];

    for config in cases {
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    let mut config = BenchConfig::new();
    config.search.present_ratio = -0.1;
    assert!(config.validate().is_err());

    let mut config = BenchConfig::new();
    config.power.repetitions = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_unknown_distribution_rejected() {
    let toml = r#"
        [[search.distributions]]
        type = "zipf"
    "#;
    assert!(matches!(
        BenchConfig::from_toml_str(toml),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_load_missing_file() {
    assert!(matches!(
        BenchConfig::load("definitely/not/here.toml"),
        Err(ConfigError::Io(_))
    ));
}
