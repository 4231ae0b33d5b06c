//! Configuration validation and serialization.

use adaptive_slices::{AdaptiveQueue, AdaptiveStack, ParamError, QueueConfig, StackConfig};

#[test]
fn invalid_queue_config_is_rejected_at_construction() {
    let config = QueueConfig {
        compact_waste_percent: 101,
        ..QueueConfig::default()
    };

    let err = AdaptiveQueue::<u8>::with_config(config, []).unwrap_err();
    assert_eq!(err.param(), "compact waste percent");
    assert!(matches!(
        err,
        ParamError::NotAtMost {
            limit: 100,
            value: 101,
            ..
        }
    ));
}

#[test]
fn invalid_stack_config_is_rejected_at_construction() {
    let config = StackConfig {
        reallocate_waste_buffer: 100,
        ..StackConfig::default()
    };

    let err = AdaptiveStack::<u8>::with_config(config, [1, 2]).unwrap_err();
    assert_eq!(err.param(), "reallocate waste buffer");
}

#[test]
fn partial_json_fills_in_defaults() {
    let config: QueueConfig =
        serde_json::from_str(r#"{ "compact_on_enqueue": false, "min_optimization_length": 8 }"#)
            .unwrap();

    assert!(!config.compact_on_enqueue);
    assert_eq!(config.min_optimization_length, 8);
    assert_eq!(
        config.reallocate_waste_percent,
        QueueConfig::default().reallocate_waste_percent
    );

    let queue = AdaptiveQueue::<u8>::with_config(config, []).unwrap();
    assert_eq!(queue.config(), &config);
}

#[test]
fn stack_config_serializes_every_field() {
    let json = serde_json::to_value(StackConfig::default()).unwrap();

    assert_eq!(json["reallocate_on_pop"], true);
    assert_eq!(json["min_optimization_length"], 100);
    assert_eq!(json["reallocate_waste_percent"], 75);
    assert_eq!(json["reallocate_waste_buffer"], 80);
}
