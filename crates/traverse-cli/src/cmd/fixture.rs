use crate::fixture_path::FixtureSource;
use crate::output::print_json;
use traverse_core::record::Record;
use traverse_core::sequence::Sequence;

pub fn run(source: &FixtureSource, json: bool) -> anyhow::Result<()> {
    let fixture = source.load()?;

    if json {
        #[derive(serde::Serialize)]
        struct FixtureOutput<'a> {
            source: String,
            sequence: &'a Sequence,
            record: &'a Record,
        }

        let output = FixtureOutput {
            source: match source {
                FixtureSource::Builtin => "builtin".to_string(),
                FixtureSource::File(path) => path.display().to_string(),
            },
            sequence: &fixture.sequence,
            record: &fixture.record,
        };
        return print_json(&output);
    }

    match source {
        FixtureSource::Builtin => println!("Fixture: builtin demo data"),
        FixtureSource::File(path) => println!("Fixture: {}", path.display()),
    }
    println!("Sequence: {}", fixture.sequence);
    println!("Record:");
    for (key, value) in fixture.record.entries() {
        println!("  {key}: {value}");
    }

    Ok(())
}
