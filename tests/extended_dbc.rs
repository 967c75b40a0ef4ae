use candb::dbc;
use candb::{
    AttributeValue, CanDatabase, DbcParseError, Endianness, Message, MuxRole, Signal, Signedness,
    StartValue, ValueType,
};

const EXTENDED_EXAMPLE: &str = include_str!("data/extended_example.dbc");

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn load() -> CanDatabase {
    init_logger();
    dbc::from_str(EXTENDED_EXAMPLE).expect("Failed to parse extended_example.dbc")
}

fn names(msg: &Message) -> Vec<&str> {
    msg.signals.iter().map(|s| s.name.as_str()).collect()
}

#[allow(clippy::too_many_arguments)]
fn check_signal(
    sig: &Signal,
    start_bit: u16,
    bit_length: u16,
    endian: Endianness,
    sign: Signedness,
    factor: f64,
    offset: f64,
    min: f64,
    max: f64,
    unit: &str,
    receivers: &[&str],
    mux: MuxRole,
) {
    assert_eq!(sig.start_bit, start_bit, "{}", sig.name);
    assert_eq!(sig.bit_length, bit_length, "{}", sig.name);
    assert_eq!(sig.endian, endian, "{}", sig.name);
    assert_eq!(sig.sign, sign, "{}", sig.name);
    assert!((sig.factor - factor).abs() < 1e-9, "{}", sig.name);
    assert!((sig.offset - offset).abs() < 1e-9, "{}", sig.name);
    assert_eq!(sig.min, min, "{}", sig.name);
    assert_eq!(sig.max, max, "{}", sig.name);
    assert_eq!(sig.unit, unit, "{}", sig.name);
    assert_eq!(sig.receivers, receivers, "{}", sig.name);
    assert_eq!(sig.mux, mux, "{}", sig.name);
}

#[test]
fn test_global_data() {
    let db: CanDatabase = load();

    assert_eq!(db.version, "");
    assert_eq!(db.nodes, vec!["DBG", "DRIVER", "IO", "MOTOR", "SENSOR"]);
    assert_eq!(db.symbols.len(), 28);
    assert_eq!(db.symbols[0], "NS_DESC_");
    assert_eq!(db.comment, None);

    assert_eq!(db.gen_msg_cycle_time.min, Some(0));
    assert_eq!(db.gen_msg_cycle_time.max, Some(65535));
    assert_eq!(db.gen_msg_cycle_time.default, Some(0));
    assert_eq!(db.gen_sig_start_value.min, Some(0.0));
    assert_eq!(db.gen_sig_start_value.max, Some(0.0));
    assert_eq!(db.gen_sig_start_value.default, Some(0.0));

    assert_eq!(db.value_tables.len(), 2);
    assert_eq!(
        db.value_table("HeartbeatCommands").and_then(|t| t.label(1)),
        Some("SYNC")
    );

    assert_eq!(db.attributes["BusType"], AttributeValue::Str("CAN".to_string()));
    assert_eq!(db.attribute_definitions.len(), 4);
    assert_eq!(
        db.attribute_definitions["GenMsgSendType"].default,
        Some(AttributeValue::Enum("Cyclic".to_string()))
    );
}

#[test]
fn test_messages() {
    let db: CanDatabase = load();

    let ids: Vec<u32> = db.messages.keys().copied().collect();
    assert_eq!(ids, vec![100, 101, 123, 200, 222, 400, 500, 1845, 2364473086]);

    // (id, name, dlc, senders, cycle time, comment, signal count)
    let expected: [(u32, &str, u16, &[&str], Option<u32>, Option<&str>, usize); 9] = [
        (
            2364473086,
            "VECTOR_INDEPENDENT_SIG_MSG",
            2,
            &[],
            None,
            Some("This is a message for not used signals, created by Vector CANdb++ DBC OLE DB Provider."),
            10,
        ),
        (
            100,
            "DRIVER_HEARTBEAT",
            8,
            &["DRIVER"],
            Some(1000),
            Some("Sync message used to synchronize the controllers"),
            2,
        ),
        (500, "IO_DEBUG", 4, &["IO", "DRIVER"], Some(100), None, 4),
        (101, "MOTOR_CMD", 2, &["DRIVER"], Some(100), None, 3),
        (400, "MOTOR_STATUS", 8, &["MOTOR"], Some(100), Some("Comment on message"), 2),
        (123, "FUEL_STATUS", 8, &["MOTOR"], None, None, 1),
        (200, "SENSOR_SONARS", 8, &["SENSOR"], None, None, 10),
        (222, "SENSOR_TWO_SONARS", 8, &["SENSOR"], None, None, 8),
        (1845, "TemperatureMsg", 8, &[], None, None, 5),
    ];

    for (id, name, dlc, senders, cycle_time, comment, signal_count) in expected {
        let msg: &Message = db.message(id).unwrap();
        assert_eq!(msg.id, id);
        assert_eq!(msg.name, name);
        assert_eq!(msg.dlc, dlc, "{}", name);
        assert_eq!(msg.senders, senders, "{}", name);
        assert_eq!(msg.cycle_time, cycle_time, "{}", name);
        assert_eq!(msg.comment.as_deref(), comment, "{}", name);
        assert_eq!(msg.signals.len(), signal_count, "{}", name);
    }

    assert!(db.message(2364473086).unwrap().is_extended());
    assert_eq!(db.message(1845).unwrap().id_hex(), "0x735");
    assert_eq!(
        db.message(100).unwrap().attributes["GenMsgSendType"],
        AttributeValue::Enum("Cyclic".to_string())
    );
    assert_eq!(
        db.message(123).unwrap().attributes["GenMsgSendType"],
        AttributeValue::Enum("Event".to_string())
    );
}

#[test]
fn test_driver_heartbeat() {
    let db: CanDatabase = load();
    let msg: &Message = db.message(100).unwrap();
    assert_eq!(names(msg), vec!["DRIVER_HEARTBEAT_cmd", "TEST_123"]);

    let cmd: &Signal = &msg.signals[0];
    check_signal(
        cmd,
        0,
        8,
        Endianness::Intel,
        Signedness::Unsigned,
        1.0,
        0.0,
        0.0,
        255.0,
        "",
        &["SENSOR", "MOTOR"],
        MuxRole::NotMultiplexed,
    );
    assert_eq!(cmd.start_value, StartValue::Numeric(3.0));
    assert_eq!(cmd.comment, None);
    assert_eq!(cmd.value_type, None);
    assert_eq!(
        cmd.value_description.as_deref(),
        Some("2 DRIVER_HEARTBEAT_cmd_REBOOT 1 DRIVER_HEARTBEAT_cmd_SYNC 0 DRIVER_HEARTBEAT_cmd_NOOP")
    );

    let test: &Signal = &msg.signals[1];
    check_signal(
        test,
        65,
        16,
        Endianness::Intel,
        Signedness::Unsigned,
        1.0,
        0.0,
        0.0,
        0.0,
        "",
        &["SENSOR", "MOTOR"],
        MuxRole::NotMultiplexed,
    );
    assert_eq!(test.start_value, StartValue::Absent);
    assert_eq!(test.value_description, None);
}

#[test]
fn test_io_debug() {
    let db: CanDatabase = load();
    let msg: &Message = db.message(500).unwrap();

    let unsigned: &Signal = msg.signal("IO_DEBUG_test_unsigned").unwrap();
    assert_eq!(unsigned.start_value_numeric(), Some(12.0));
    assert_eq!(unsigned.receivers, vec!["DBG"]);

    let enumerated: &Signal = msg.signal("IO_DEBUG_test_enum").unwrap();
    assert_eq!(enumerated.start_value, StartValue::Absent);
    assert_eq!(
        enumerated.value_description.as_deref(),
        Some("2 IO_DEBUG_test2_enum_two 1 IO_DEBUG_test2_enum_one")
    );

    let signed: &Signal = msg.signal("IO_DEBUG_test_signed").unwrap();
    check_signal(
        signed,
        17,
        7,
        Endianness::Intel,
        Signedness::Signed,
        1.5,
        0.0,
        -96.0,
        94.5,
        "",
        &["DBG"],
        MuxRole::NotMultiplexed,
    );
    assert_eq!(signed.start_value, StartValue::Numeric(0.0));

    let float: &Signal = msg.signal("IO_DEBUG_test_float").unwrap();
    assert_eq!(float.sign, Signedness::Signed);
    assert_eq!(float.factor, 0.5);
    assert_eq!(float.max, 127.5);
    assert_eq!(float.start_value, StartValue::Numeric(0.0));
}

#[test]
fn test_motor_and_fuel() {
    let db: CanDatabase = load();

    let steer: &Signal = db.signal(101, "MOTOR_CMD_steer").unwrap();
    check_signal(
        steer,
        0,
        4,
        Endianness::Intel,
        Signedness::Signed,
        1.0,
        -5.0,
        -5.0,
        5.0,
        "",
        &["MOTOR"],
        MuxRole::NotMultiplexed,
    );

    // same signal name in two messages stays two distinct signals
    let in_cmd: &Signal = db.signal(101, "MOTOR_STATUS_wheel_error").unwrap();
    let in_status: &Signal = db.signal(400, "MOTOR_STATUS_wheel_error").unwrap();
    assert_eq!(in_cmd.start_bit, 8);
    assert_eq!(in_status.start_bit, 0);

    let speed: &Signal = db.signal(400, "MOTOR_STATUS_speed_kph").unwrap();
    check_signal(
        speed,
        6,
        16,
        Endianness::Intel,
        Signedness::Signed,
        1.0,
        0.0,
        -32768.0,
        32767.0,
        "kph",
        &["DRIVER", "IO"],
        MuxRole::NotMultiplexed,
    );
    assert_eq!(speed.comment.as_deref(), Some("Comment on signal"));

    let level: &Signal = db.signal(123, "FUEL_STATUS_level").unwrap();
    assert_eq!(level.bit_length, 32);
    assert_eq!(level.min, -3.4e38);
    assert_eq!(level.max, 3.4e38);
    assert_eq!(level.value_type, Some(ValueType::Float32));
}

#[test]
fn test_multiplexing() {
    let db: CanDatabase = load();

    let sonars: &Message = db.message(200).unwrap();
    let roles: Vec<MuxRole> = sonars.signals.iter().map(|s| s.mux).collect();
    assert_eq!(
        roles,
        vec![
            MuxRole::Multiplexer,
            MuxRole::NotMultiplexed,
            MuxRole::Multiplexed(0),
            MuxRole::Multiplexed(0),
            MuxRole::Multiplexed(0),
            MuxRole::Multiplexed(0),
            MuxRole::Multiplexed(1),
            MuxRole::Multiplexed(1),
            MuxRole::Multiplexed(1),
            MuxRole::Multiplexed(1),
        ]
    );
    assert_eq!(sonars.multiplexed_by(1).count(), 4);
    assert_eq!(
        sonars.signal("SENSOR_SONARS_no_filt_rear").unwrap().receivers,
        vec!["DBG"]
    );

    let two: &Message = db.message(222).unwrap();
    assert_eq!(two.signal("SENSOR_TWO_SONARS_err_count").unwrap().bit_length, 44);
    assert_eq!(two.signal("SENSOR_TWO_SONARS_hier").unwrap().mux, MuxRole::Multiplexed(55));
    assert_eq!(two.signal("SENSOR_TWO_SONARS_da").unwrap().mux, MuxRole::Multiplexed(55));

    let temperature: &Message = db.message(1845).unwrap();
    let switch: &Signal = temperature.multiplexer().unwrap();
    check_signal(
        switch,
        39,
        4,
        Endianness::Motorola,
        Signedness::Unsigned,
        1.0,
        0.0,
        0.0,
        0.0,
        "",
        &[],
        MuxRole::Multiplexer,
    );
    let always: &Signal = temperature.signal("NormalSignalAlwaysPresent").unwrap();
    assert_eq!(always.mux, MuxRole::NotMultiplexed);
    assert_eq!(always.endian, Endianness::Intel);
    assert_eq!(always.sign, Signedness::Signed);

    for (name, index) in [
        ("TemperatureIndoorsMultiplexed", 0),
        ("TemperatureOutdoorsMultiplexed", 3),
        ("TemperatureUndergroundMultiplexd", 11),
    ] {
        check_signal(
            temperature.signal(name).unwrap(),
            7,
            16,
            Endianness::Motorola,
            Signedness::Signed,
            0.1,
            -40.0,
            0.0,
            0.0,
            "degC",
            &[],
            MuxRole::Multiplexed(index),
        );
    }
}

#[test]
fn test_independent_signals() {
    let db: CanDatabase = load();
    let msg: &Message = db.message(2364473086).unwrap();

    for sig in &msg.signals {
        assert_eq!(sig.start_bit, 0, "{}", sig.name);
        assert!(sig.receivers.is_empty(), "{}", sig.name);
        assert_eq!(sig.mux, MuxRole::NotMultiplexed, "{}", sig.name);
    }
    assert_eq!(msg.signal("SENSOR_SONARS_mux").unwrap().bit_length, 4);
    assert_eq!(msg.signal("SENSOR_SONARS_left").unwrap().factor, 0.1);
}

#[test]
fn test_idempotent() {
    init_logger();
    let first: CanDatabase = dbc::from_str(EXTENDED_EXAMPLE).unwrap();
    let second: CanDatabase = dbc::from_str(EXTENDED_EXAMPLE).unwrap();
    assert_eq!(first, second);

    let crlf: String = EXTENDED_EXAMPLE.replace('\n', "\r\n");
    assert_eq!(dbc::from_str(&crlf).unwrap(), first);
}

#[test]
fn test_attribute_order_independence() {
    init_logger();
    let defaults_first: &str = "\
BA_DEF_DEF_ \"GenSigStartValue\" 0;
BA_DEF_DEF_ \"GenMsgCycleTime\" 0;
BA_DEF_ SG_ \"GenSigStartValue\" INT 0 0;
BA_DEF_ BO_ \"GenMsgCycleTime\" INT 0 65535;
";
    let definitions_first: &str = "\
BA_DEF_ BO_ \"GenMsgCycleTime\" INT 0 65535;
BA_DEF_ SG_ \"GenSigStartValue\" INT 0 0;
BA_DEF_DEF_ \"GenMsgCycleTime\" 0;
BA_DEF_DEF_ \"GenSigStartValue\" 0;
";
    let a: CanDatabase = dbc::from_str(defaults_first).unwrap();
    let b: CanDatabase = dbc::from_str(definitions_first).unwrap();
    assert_eq!(a.gen_msg_cycle_time, b.gen_msg_cycle_time);
    assert_eq!(a.gen_sig_start_value, b.gen_sig_start_value);
    assert_eq!(a.gen_msg_cycle_time.default, Some(0));
}

#[test]
fn test_stray_patches_leave_model_unchanged() {
    init_logger();
    let stray: String = format!(
        "{}\nCM_ BO_ 4242 \"gone\";\nCM_ SG_ 100 missing \"gone\";\nBA_ \"GenMsgCycleTime\" BO_ 4242 5;\nBA_ \"GenSigStartValue\" SG_ 500 missing 7;\nVAL_ 4242 x 1 \"one\" ;\n",
        EXTENDED_EXAMPLE.trim_end()
    );
    let clean: CanDatabase = dbc::from_str(EXTENDED_EXAMPLE).unwrap();
    assert_eq!(dbc::from_str(&stray).unwrap(), clean);
}

#[test]
fn test_syntax_error_returns_no_model() {
    init_logger();
    let broken: String = EXTENDED_EXAMPLE.replace("BO_ 123 FUEL_STATUS: 8 MOTOR", "BO_ 123 FUEL_STATUS 8 MOTOR");
    match dbc::from_str(&broken) {
        Err(DbcParseError::Syntax { line, message, .. }) => {
            assert!(line > 1);
            assert!(!message.is_empty());
        }
        other => panic!("expected a syntax error, got {:?}", other.map(|db| db.messages.len())),
    }
}

#[test]
fn test_from_file() {
    init_logger();
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/extended_example.dbc");
    let db: CanDatabase = dbc::from_file(path).unwrap();
    assert_eq!(db, dbc::from_str(EXTENDED_EXAMPLE).unwrap());
}

#[test]
fn test_serde_snapshot() {
    let db: CanDatabase = load();
    let json: String = serde_json::to_string(&db).unwrap();
    let back: CanDatabase = serde_json::from_str(&json).unwrap();
    assert_eq!(back.messages.len(), db.messages.len());
    assert_eq!(back.message(100), db.message(100));
}
