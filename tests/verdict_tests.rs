use automatty::automata::errors::AutomatonError;
use automatty::automata::npda::Npda;
use automatty::automata::{Machine, Verdict};

fn verdict(machine: Machine, input: &str) -> Verdict {
    machine.run(input).expect("run failed").verdict
}

/// All binary strings of length 0..=max_len, as '0'/'1' text
fn binary_strings(max_len: usize) -> Vec<String> {
    let mut out = Vec::new();
    for len in 0..=max_len {
        for bits in 0u32..(1 << len) {
            let s: String = (0..len)
                .map(|i| if bits & (1 << i) != 0 { '1' } else { '0' })
                .collect();
            out.push(s);
        }
    }
    out
}

#[test]
fn dfa_literal_scenarios() {
    assert_eq!(verdict(Machine::Dfa, "1"), Verdict::Accepted);
    assert_eq!(verdict(Machine::Dfa, "01"), Verdict::Accepted);
    assert_eq!(verdict(Machine::Dfa, "11"), Verdict::Rejected);
    assert_eq!(verdict(Machine::Dfa, ""), Verdict::Rejected);
    assert_eq!(verdict(Machine::Dfa, "0"), Verdict::Rejected);
}

#[test]
fn pda_literal_scenarios() {
    assert_eq!(verdict(Machine::Pda, "1"), Verdict::Accepted); // n = 0
    assert_eq!(verdict(Machine::Pda, "011"), Verdict::Accepted); // n = 1
    assert_eq!(verdict(Machine::Pda, "0001111"), Verdict::Accepted); // n = 3
    assert_eq!(verdict(Machine::Pda, "01"), Verdict::Rejected);
    assert_eq!(verdict(Machine::Pda, "10"), Verdict::Rejected);
}

#[test]
fn npda_literal_scenarios() {
    assert_eq!(verdict(Machine::Npda, "0"), Verdict::Accepted);
    assert_eq!(verdict(Machine::Npda, "101"), Verdict::Accepted);
    assert_eq!(verdict(Machine::Npda, "1001"), Verdict::Accepted);
    assert_eq!(verdict(Machine::Npda, "10"), Verdict::Rejected);
    assert_eq!(verdict(Machine::Npda, "0011"), Verdict::Rejected);
}

#[test]
fn npda_empty_string_regression() {
    // Decision: the empty string is a trivial palindrome and is accepted.
    assert_eq!(verdict(Machine::Npda, ""), Verdict::Accepted);
}

#[test]
fn dfa_accepts_exactly_one_one() {
    for s in binary_strings(10) {
        let expected = if s.chars().filter(|&c| c == '1').count() == 1 {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        };
        assert_eq!(verdict(Machine::Dfa, &s), expected, "input {:?}", s);
    }
}

#[test]
fn pda_accepts_zeros_then_one_more_one() {
    for s in binary_strings(10) {
        let zeros = s.chars().take_while(|&c| c == '0').count();
        let rest = &s[zeros..];
        let expected = if rest.chars().all(|c| c == '1') && rest.len() == zeros + 1 {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        };
        assert_eq!(verdict(Machine::Pda, &s), expected, "input {:?}", s);
    }
}

#[test]
fn npda_accepts_palindromes() {
    // Length 8 stays well inside the default configuration cap, so the
    // search is complete over this range.
    for s in binary_strings(8) {
        let reversed: String = s.chars().rev().collect();
        let expected = if s == reversed {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        };
        assert_eq!(verdict(Machine::Npda, &s), expected, "input {:?}", s);
    }
}

#[test]
fn validation_gate_applies_to_all_machines() {
    for machine in Machine::ALL {
        for bad in ["2", "01a", " 01", "0 1", "01\n", "abc", "０１"] {
            assert_eq!(verdict(machine, bad), Verdict::Invalid, "{:?}", bad);
        }
        assert!(!Machine::validate("01a"));
        assert!(Machine::validate("0101"));
    }
}

#[test]
fn runs_are_pure_and_idempotent() {
    // Interleave calls across machines; every repeat must agree with the
    // first answer, since no engine retains state between invocations.
    let cases = ["", "0", "1", "1001", "0011", "011", "x"];
    let mut first: Vec<(Machine, &str, Verdict)> = Vec::new();
    for machine in Machine::ALL {
        for input in cases {
            first.push((machine, input, verdict(machine, input)));
        }
    }
    for _ in 0..3 {
        for &(machine, input, expected) in &first {
            assert_eq!(verdict(machine, input), expected);
        }
    }
}

#[test]
fn oversized_input_is_an_error_not_a_rejection() {
    let long = "0".repeat(2000);
    for machine in Machine::ALL {
        match machine.run(&long) {
            Err(AutomatonError::InputTooLong { length, limit }) => {
                assert_eq!(length, 2000);
                assert_eq!(limit, 1000);
            }
            other => panic!("{}: expected InputTooLong, got {:?}", machine.name(), other),
        }
    }
}

#[test]
fn npda_cap_is_overridable() {
    // A generous cap changes nothing for ordinary inputs.
    let roomy = Npda::with_limits(10_000, 1000);
    assert_eq!(roomy.run("110100").unwrap().verdict, Verdict::Rejected);
    assert_eq!(roomy.run("1001001").unwrap().verdict, Verdict::Accepted);
    assert_eq!(verdict(Machine::Npda, "110100"), Verdict::Rejected);
    assert_eq!(verdict(Machine::Npda, "1001001"), Verdict::Accepted);
}
