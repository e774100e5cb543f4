use automatty::automata::{Machine, Verdict};

#[test]
fn battery_covers_every_canned_input() {
    for machine in Machine::ALL {
        let entries = machine.battery().expect("battery failed");
        assert_eq!(entries.len(), machine.battery_inputs().len());
        for (entry, &input) in entries.iter().zip(machine.battery_inputs()) {
            assert_eq!(entry.input, input);
        }
    }
}

#[test]
fn battery_agrees_with_run() {
    // The battery is nothing but repeated run() calls; the table must match
    // what a caller would get by running each input directly.
    for machine in Machine::ALL {
        let entries = machine.battery().expect("battery failed");
        for entry in entries {
            let direct = machine.run(entry.input).expect("run failed").verdict;
            assert_eq!(entry.verdict, direct, "{} {:?}", machine.name(), entry.input);
        }
    }
}

#[test]
fn battery_retains_no_state_between_calls() {
    for machine in Machine::ALL {
        let first = machine.battery().expect("battery failed");
        // Unrelated runs in between must not disturb the next table.
        machine.run("10101").expect("run failed");
        machine.run("x!").expect("run failed");
        let second = machine.battery().expect("battery failed");
        let verdicts = |entries: &[automatty::automata::BatteryEntry]| -> Vec<Verdict> {
            entries.iter().map(|e| e.verdict).collect()
        };
        assert_eq!(verdicts(&first), verdicts(&second));
    }
}

#[test]
fn battery_spot_checks() {
    let dfa: Vec<_> = Machine::Dfa.battery().unwrap();
    let lookup = |input: &str| {
        dfa.iter()
            .find(|e| e.input == input)
            .map(|e| e.verdict)
            .unwrap()
    };
    assert_eq!(lookup("1"), Verdict::Accepted);
    assert_eq!(lookup("0000000000"), Verdict::Rejected);
    assert_eq!(lookup("0110"), Verdict::Rejected);

    let npda: Vec<_> = Machine::Npda.battery().unwrap();
    let lookup = |input: &str| {
        npda.iter()
            .find(|e| e.input == input)
            .map(|e| e.verdict)
            .unwrap()
    };
    assert_eq!(lookup("010"), Verdict::Accepted);
    assert_eq!(lookup(""), Verdict::Accepted);
    assert_eq!(lookup("100"), Verdict::Rejected);
}
