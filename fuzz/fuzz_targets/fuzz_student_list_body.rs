//! Fuzz target: decoding of `/alunos` list responses.
//!
//! Arbitrary bytes from the API must never panic the decoder, and every
//! decoded record must survive being turned into an edit form.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(students) = roster_core::decode_student_list(data) {
        for student in &students {
            let _ = student.draft().validate();
        }
    }
});
