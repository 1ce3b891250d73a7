use std::path::Path;

use log::info;
use vn_accent_core::{AccentConfig, AccentRestorer, AccentTable, Lexicon, LexiconOracle};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Settings follow the model directory layout: ./data/config.json.
    // Missing file means defaults (MAXLEN 32, NGRAM 5, INVERT, PAD_WORDS_INPUT)
    // The words of an NGRAM window must fit in MAXLEN characters, otherwise
    // strict mode rejects the input. The bundled config uses MAXLEN 64
    let config_path = Path::new("./data/config.json");
    let config = if config_path.exists() {
        AccentConfig::from_file(config_path)?
    } else {
        AccentConfig::default()
    };
    info!("config: {config:?}");

    // Learn every .txt corpus in ./data
    // A compiled .bin is written next to each corpus and reused on the next run
    let table = AccentTable::vietnamese();
    let lexicon = Lexicon::from_folder("./data", &table)?;
    info!("lexicon: {} words from {:?}", lexicon.len(), lexicon.corpus_names());

    let oracle = LexiconOracle::new(lexicon, &config, &table);
    let restorer = AccentRestorer::new(config, table, oracle)?;

    let samples = [
        "co gai den tu hom qua",
        "Toi di hoc, co ay den tu Ha Noi.",
        "CHUNG TOI AN COM O NHA!",
    ];
    for sample in samples {
        println!("{sample} -> {}", restorer.add_accent(sample)?);
    }

    // Characters outside the alphabet fail in strict mode
    match restorer.add_accent("ca phe ç") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }

    Ok(())
}
