use bednbt::{level, Value};
use clap::{App, Arg};
use env_logger::Env;
use log::info;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn print_value(name: &str, value: &Value, indent: usize) {
    match value {
        Value::Compound(c) => {
            println!("{:indent$}{}: Compound ({} entries)", "", name, c.len(), indent = indent);
            for (key, v) in c.iter() {
                print_value(key, v, indent + 4);
            }
        }
        Value::List(l) => {
            println!(
                "{:indent$}{}: List of {} ({} elements)",
                "",
                name,
                l.element_tag(),
                l.len(),
                indent = indent
            );
            for (i, v) in l.iter().enumerate() {
                print_value(&i.to_string(), v, indent + 4);
            }
        }
        Value::String(s) => println!("{:indent$}{}: {:?}", "", name, s, indent = indent),
        v => println!("{:indent$}{}: {:?}", "", name, v, indent = indent),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let matches = App::new("level-dump")
        .about("Print the contents of a level.dat")
        .arg(Arg::with_name("file").takes_value(true).required(true))
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("print as JSON instead of a tree")
                .takes_value(false)
                .required(false),
        )
        .get_matches();

    let path = matches.value_of("file").ok_or("no file given")?;
    let compound = level::load_level_file(path)?;
    info!("{} entries in {}", compound.len(), path);

    if matches.is_present("json") {
        let json = to_json(&Value::Compound(compound));
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        for (key, v) in compound.iter() {
            print_value(key, v, 0);
        }
    }

    Ok(())
}

fn to_json(value: &Value) -> serde_json::Value {
    use serde_json::{json, Map};

    match value {
        Value::End => serde_json::Value::Null,
        Value::Byte(v) => json!(v),
        Value::Short(v) => json!(v),
        Value::Int(v) => json!(v),
        Value::Long(v) => json!(v),
        Value::Float(v) => json!(v),
        Value::Double(v) => json!(v),
        Value::ByteArray(v) => json!(**v),
        Value::String(v) => json!(v),
        Value::List(l) => l.iter().map(to_json).collect(),
        Value::Compound(c) => {
            let map: Map<String, serde_json::Value> =
                c.iter().map(|(k, v)| (k.to_owned(), to_json(v))).collect();
            serde_json::Value::Object(map)
        }
        Value::IntArray(v) => json!(**v),
        Value::LongArray(v) => json!(**v),
    }
}
