use clap::Parser;
use unihan_index::{Character, Database, UnihanError};

#[derive(Parser)]
#[command(name = "unihan-index")]
#[command(about = "Load Unihan.zip into memory and look up characters")]
struct Args {
    /// Path to Unihan.zip
    #[arg(long, default_value = "Unihan.zip")]
    zip: String,

    /// Code points to look up, in hex (4E2D or U+4E2D)
    code_points: Vec<String>,
}

fn parse_code_point(arg: &str) -> Option<u32> {
    let hex = arg
        .strip_prefix("U+")
        .or_else(|| arg.strip_prefix("u+"))
        .unwrap_or(arg);
    u32::from_str_radix(hex, 16).ok()
}

fn print_character(ch: &Character) {
    let glyph = ch.as_char().unwrap_or(char::REPLACEMENT_CHARACTER);
    println!("U+{:04X} {}", ch.code_point, glyph);

    if let Some(pinyin) = &ch.pinyin {
        match &ch.pinyin_taiwan {
            Some(tw) => println!("  Pinyin: {} (Taiwan: {})", pinyin, tw),
            None => println!("  Pinyin: {}", pinyin),
        }
    }
    if let Some(definition) = &ch.definition {
        println!("  Definition: {}", definition);
    }
    if ch.strokes > 0 {
        match ch.strokes_taiwan {
            Some(tw) => println!("  Strokes: {} (Taiwan: {})", ch.strokes, tw),
            None => println!("  Strokes: {}", ch.strokes),
        }
    }
    if let Some(rs) = ch.radical_stroke_counts.kangxi {
        println!("  KangXi radical-stroke: {}", rs);
    }
    if let Some(rs) = ch.radical_stroke_counts.unicode {
        println!("  Unicode radical-stroke: {}", rs);
    }

    let sources = &ch.irg_sources;
    let regions = [
        ("G", &sources.g),
        ("H", &sources.h),
        ("J", &sources.j),
        ("KP", &sources.kp),
        ("K", &sources.k),
        ("M", &sources.m),
        ("T", &sources.t),
        ("V", &sources.v),
    ];
    for (region, source) in regions {
        if let Some(source) = source {
            println!("  IRG {}: {}", region, source);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let db = match Database::initialise(&args.zip) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("ERROR: Failed to load {}", args.zip);
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    println!("{} characters loaded", db.loaded_count());

    for arg in &args.code_points {
        println!("{}", "=".repeat(60));
        let Some(code_point) = parse_code_point(arg) else {
            eprintln!("ERROR: '{}' is not a hexadecimal code point", arg);
            continue;
        };
        match db.lookup(code_point) {
            Ok(ch) => print_character(ch),
            Err(e @ UnihanError::NotFound(_)) => println!("{}", e),
            Err(e) => eprintln!("ERROR: {}", e),
        }
    }
}
