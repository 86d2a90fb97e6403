use crate::input::read_instruction_from;

use std::io::Cursor;

#[test]
fn given_argument_when_read_then_reader_ignored() {
    let instruction =
        read_instruction_from(Some("Update TASK-1 Status -> Active"), Cursor::new("ignored"))
            .unwrap();

    assert_eq!(instruction, "Update TASK-1 Status -> Active");
}

#[test]
fn given_no_argument_when_read_then_whole_reader_used() {
    let batch = "Update following individual tasks:\nTASK 1 -> Status -> Active\nTASK 2 -> Status -> New\n";

    let instruction = read_instruction_from(None, Cursor::new(batch)).unwrap();

    assert_eq!(instruction, batch);
}
