// ═══════════════════════════════════════════════════════════════════
// Storage Tests — key-value stores, StorageManager, SessionGate
// ═══════════════════════════════════════════════════════════════════

use chrono::{Duration, NaiveDate, TimeZone, Utc};

use wealth_tracker_core::errors::CoreError;
use wealth_tracker_core::models::asset::{AssetBreakdown, AssetSnapshot};
use wealth_tracker_core::models::cash::CashSourceRecord;
use wealth_tracker_core::models::dashboard::DashboardData;
use wealth_tracker_core::models::settings::{StorageKeys, TrackerConfig};
use wealth_tracker_core::models::wealth::WealthRecord;
use wealth_tracker_core::storage::file::FileStore;
use wealth_tracker_core::storage::manager::StorageManager;
use wealth_tracker_core::storage::memory::MemoryStore;
use wealth_tracker_core::storage::session::SessionGate;
use wealth_tracker_core::storage::traits::KeyValueStore;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sample_dashboard() -> DashboardData {
    let breakdown: AssetBreakdown = [("Car", 10_000.0), ("House", 200_000.0)]
        .into_iter()
        .collect();
    DashboardData {
        history: vec![
            WealthRecord::new(d(2024, 1, 1), 1000.0),
            WealthRecord {
                comment: "Salariu 4000".into(),
                ..WealthRecord::new(d(2024, 2, 1), 1100.0)
            },
        ],
        cash_split: vec![CashSourceRecord::new("Revolut", 1000.0, 200.0, 5.0)],
        investments: Vec::new(),
        assets: vec![AssetSnapshot::new(d(2024, 1, 1), breakdown)],
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Key-value stores
// ═══════════════════════════════════════════════════════════════════

mod memory_store {
    use super::*;

    #[test]
    fn set_get_remove() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("a", "1".into()).unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.len(), 1);

        store.set("a", "2".into()).unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
    }

    #[test]
    fn removing_missing_key_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.remove("nothing").is_ok());
    }
}

mod file_store {
    use super::*;

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileStore::open(dir.path()).unwrap();
            store.set("wealthTrackerData", "[]".into()).unwrap();
        }
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("wealthTrackerData").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("wealthTrackerData.json").exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.dir(), nested.as_path());
    }

    #[test]
    fn missing_key_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("absent").unwrap(), None);
        assert!(store.remove("absent").is_ok());

        store.set("present", "x".into()).unwrap();
        store.remove("present").unwrap();
        assert_eq!(store.get("present").unwrap(), None);
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        for key in ["../escape", "a/b", "", "with space"] {
            let err = store.set(key, "x".into()).unwrap_err();
            assert!(matches!(err, CoreError::Storage(_)), "key {key:?}");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  StorageManager
// ═══════════════════════════════════════════════════════════════════

mod manager {
    use super::*;

    #[test]
    fn dashboard_round_trip() {
        let mut manager = StorageManager::new(MemoryStore::new(), StorageKeys::default());
        let data = sample_dashboard();

        manager.save_dashboard(&data).unwrap();
        assert_eq!(manager.load_dashboard(), data);
        assert_eq!(manager.store().len(), 4);
    }

    #[test]
    fn uses_configured_keys() {
        let mut manager = StorageManager::new(MemoryStore::new(), StorageKeys::default());
        manager.save_dashboard(&sample_dashboard()).unwrap();

        let store = manager.into_store();
        for key in [
            "wealthTrackerData",
            "wealthTrackerCashSplit",
            "wealthTrackerInvestmentData",
            "wealthAssetsData",
        ] {
            assert!(store.get(key).unwrap().is_some(), "missing {key}");
        }
    }

    #[test]
    fn missing_keys_load_empty() {
        let manager = StorageManager::new(MemoryStore::new(), StorageKeys::default());
        assert!(manager.load_dashboard().is_empty());
    }

    #[test]
    fn corrupt_blob_loads_empty() {
        let mut store = MemoryStore::new();
        store.set("wealthTrackerData", "{ not an array".into()).unwrap();
        store
            .set("wealthTrackerCashSplit", r#"[{"unexpected": true}]"#.into())
            .unwrap();

        let manager = StorageManager::new(store, StorageKeys::default());
        let data = manager.load_dashboard();
        assert!(data.history.is_empty());
        assert!(data.cash_split.is_empty());
    }

    #[test]
    fn save_replaces_previous_sequence() {
        let mut manager = StorageManager::new(MemoryStore::new(), StorageKeys::default());
        manager.save_history(&sample_dashboard().history).unwrap();
        manager
            .save_history(&[WealthRecord::new(d(2025, 1, 1), 5.0)])
            .unwrap();

        let history: Vec<WealthRecord> = manager.load_sequence("wealthTrackerData");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].eur_amount, 5.0);
    }

    #[test]
    fn clear_removes_every_document() {
        let mut manager = StorageManager::new(MemoryStore::new(), StorageKeys::default());
        manager.save_dashboard(&sample_dashboard()).unwrap();
        manager.store_mut().set("unrelated", "keep".into()).unwrap();

        manager.clear().unwrap();
        assert!(manager.load_dashboard().is_empty());
        assert_eq!(manager.store().len(), 1);
    }

    #[test]
    fn file_backed_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let data = sample_dashboard();
        {
            let store = FileStore::open(dir.path()).unwrap();
            let mut manager = StorageManager::new(store, StorageKeys::default());
            manager.save_dashboard(&data).unwrap();
        }
        let store = FileStore::open(dir.path()).unwrap();
        let manager = StorageManager::new(store, StorageKeys::default());
        assert_eq!(manager.load_dashboard(), data);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  SessionGate
// ═══════════════════════════════════════════════════════════════════

mod session {
    use super::*;

    fn gate() -> SessionGate {
        SessionGate::new("wealthTrackerSession", Duration::minutes(30))
    }

    #[test]
    fn active_until_expiry() {
        let mut store = MemoryStore::new();
        let login = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let session = gate().create(&mut store, login).unwrap();
        assert_eq!(
            session.expiry,
            (login + Duration::minutes(30)).timestamp_millis()
        );

        assert!(gate().is_active(&mut store, login + Duration::minutes(29)).unwrap());
        assert!(gate().require(&mut store, login).is_ok());
    }

    #[test]
    fn expired_session_is_removed() {
        let mut store = MemoryStore::new();
        let login = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        gate().create(&mut store, login).unwrap();

        let later = login + Duration::minutes(30);
        assert!(!gate().is_active(&mut store, later).unwrap());
        assert_eq!(store.get("wealthTrackerSession").unwrap(), None);

        let err = gate().require(&mut store, later).unwrap_err();
        assert!(matches!(err, CoreError::SessionExpired));
    }

    #[test]
    fn no_session_is_inactive() {
        let mut store = MemoryStore::new();
        assert!(!gate().is_active(&mut store, Utc::now()).unwrap());
    }

    #[test]
    fn unreadable_session_is_discarded() {
        let mut store = MemoryStore::new();
        store.set("wealthTrackerSession", "garbage".into()).unwrap();
        assert!(!gate().is_active(&mut store, Utc::now()).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn end_logs_out() {
        let mut store = MemoryStore::new();
        let now = Utc::now();
        gate().create(&mut store, now).unwrap();
        gate().end(&mut store).unwrap();
        assert!(!gate().is_active(&mut store, now).unwrap());
    }

    #[test]
    fn configured_key_and_duration_take_effect() {
        let config = TrackerConfig::from_json(
            r#"{"session_key": "mySession", "session_duration_minutes": 5}"#,
        )
        .unwrap();
        let gate = SessionGate::from_config(&config).unwrap();
        assert_eq!(gate.key(), "mySession");
        assert_eq!(gate.duration(), Duration::minutes(5));

        let mut store = MemoryStore::new();
        let login = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        gate.create(&mut store, login).unwrap();

        assert!(store.get("mySession").unwrap().is_some());
        assert_eq!(store.get("wealthTrackerSession").unwrap(), None);
        assert!(gate.is_active(&mut store, login + Duration::minutes(4)).unwrap());
        assert!(!gate.is_active(&mut store, login + Duration::minutes(5)).unwrap());
    }

    #[test]
    fn out_of_range_duration_is_rejected_not_panicking() {
        for minutes in [0, -5, i64::MAX] {
            let config = TrackerConfig {
                session_duration_minutes: minutes,
                ..TrackerConfig::default()
            };
            let err = SessionGate::from_config(&config).unwrap_err();
            assert!(matches!(err, CoreError::ValidationError(_)), "minutes {minutes}");
        }
    }

    #[test]
    fn expiry_overflow_is_an_error() {
        let gate = SessionGate::new("wealthTrackerSession", Duration::days(365));
        let mut store = MemoryStore::new();
        let err = gate.create(&mut store, chrono::DateTime::<Utc>::MAX_UTC).unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
        assert!(store.is_empty());
    }
}
