use samara_flags::*;

fn main() -> Result<()> {
    let perms = define_flag_set([("READ", 1), ("WRITE", 2), ("EXECUTE", 4), ("READ_WRITE", 3)])?;
    let flags = flag_value(perms["READ"] | perms["WRITE"] | FlagValue::bit(9).unwrap_or_default());

    for record in flags.describe_with(&perms) {
        println!("{record}  {}", record.bit_position.visual);
    }

    let records: Vec<_> = flags.describe_with(&perms).collect();
    println!("{}", serde_json::to_string_pretty(&records).unwrap_or_default());
    Ok(())
}
