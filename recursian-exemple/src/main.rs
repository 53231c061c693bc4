use recursian_core::model::alphabet::{CONSONANTS, VOWELS};
use recursian_core::{all_words, io, random_word, syllabify, word_count, GenerationInput, WordCache};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows each generated level
    env_logger::init();

    // The fixed alphabet
    println!("Consonants: {}", CONSONANTS.iter().collect::<String>());
    println!("Vowels: {}", VOWELS.iter().collect::<String>());

    // Counting is cheap, generating is not
    for n in 0..=4 {
        println!("{} syllable(s): {} words", n, word_count(n)?);
    }

    // Every one-syllable word, sorted through a GenerationInput
    let mut cache = WordCache::new();
    let mut input = GenerationInput::new(1);
    input.sorted = true;
    println!("One syllable: {}", input.generate(&mut cache)?.join(" "));

    // Negative counts are rejected
    match all_words(-1) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("all_words(-1) failed: {}", e),
    }

    // Requests above the limit are rejected too
    input.syllables = 6;
    match input.generate(&mut cache) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("6 syllables failed: {}", e),
    }

    // A few random words with their syllables
    let mut rng = rand::rng();
    for i in 0..5 {
        let word = random_word(3, &mut rng)?;
        let syllables: Vec<String> = syllabify(&word)?.iter().map(ToString::to_string).collect();
        println!("Random word {}: {} ({})", i + 1, word, syllables.join("-"));
    }

    // Save and reload the two-syllable words
    let path = std::env::temp_dir().join("recursian-two-syllables.bin");
    let words = all_words(2)?;
    io::save_words(&path, &words)?;
    let loaded = io::load_words(&path)?;
    println!("Saved and reloaded {} words from {}", loaded.len(), path.display());
    std::fs::remove_file(&path)?;

    Ok(())
}
