use crate::error::Result as CliErrorResult;

use std::io::Read;

/// The instruction argument, or all of stdin when it is absent.
pub fn read_instruction(argument: Option<&str>) -> CliErrorResult<String> {
    read_instruction_from(argument, std::io::stdin().lock())
}

pub fn read_instruction_from<R: Read>(argument: Option<&str>, mut reader: R) -> CliErrorResult<String> {
    if let Some(instruction) = argument {
        return Ok(instruction.to_string());
    }

    let mut instruction = String::new();
    reader.read_to_string(&mut instruction)?;
    Ok(instruction)
}
