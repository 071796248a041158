//! Counting and modular-shift arithmetic shared by the topic generators.

const ALPHABET_LEN: i32 = 26;

/// `n!` with `0! = 1`. Exact for `n <= 20`.
pub fn factorial(n: u64) -> u64 {
    (1..=n).product()
}

/// Ordered selections `P(n, r) = n! / (n - r)!`. Zero when `r > n`.
pub fn permutation(n: u64, r: u64) -> u64 {
    if r > n {
        return 0;
    }
    factorial(n) / factorial(n - r)
}

/// Unordered selections `C(n, r) = n! / (r! (n - r)!)`. Zero when `r > n`.
pub fn combination(n: u64, r: u64) -> u64 {
    if r > n {
        return 0;
    }
    factorial(n) / (factorial(r) * factorial(n - r))
}

/// Rotate every `A..=Z` letter by `shift` positions mod 26. Anything else,
/// lowercase included, passes through unchanged.
pub fn shift_letters(text: &str, shift: i32) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                let pos = (c as u8 - b'A') as i32;
                let moved = (pos + shift).rem_euclid(ALPHABET_LEN) as u8;
                (b'A' + moved) as char
            } else {
                c
            }
        })
        .collect()
}

/// Caesar encryption: `C = (P + k) mod 26`.
pub fn caesar_encrypt(text: &str, shift: u8) -> String {
    shift_letters(text, shift as i32)
}

/// Caesar decryption: `P = (C - k) mod 26`.
pub fn caesar_decrypt(text: &str, shift: u8) -> String {
    shift_letters(text, -(shift as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_base_and_recurrence() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        for n in 1..=12u64 {
            assert_eq!(factorial(n), n * factorial(n - 1), "recurrence broke at n={n}");
        }
        assert_eq!(factorial(9), 362_880);
    }

    #[test]
    fn known_counts() {
        assert_eq!(permutation(5, 2), 20);
        assert_eq!(combination(6, 2), 15);
        assert_eq!(permutation(8, 4), 1680);
        assert_eq!(combination(9, 4), 126);
    }

    #[test]
    fn permutation_dominates_combination() {
        for n in 0..=10u64 {
            for r in 0..=n {
                let p = permutation(n, r);
                assert_eq!(p, factorial(n) / factorial(n - r));
                if r >= 1 {
                    assert!(p >= combination(n, r), "P({n},{r}) < C({n},{r})");
                }
            }
        }
    }

    #[test]
    fn combination_is_symmetric() {
        for n in 0..=10u64 {
            for r in 0..=n {
                assert_eq!(combination(n, r), combination(n, n - r), "n={n} r={r}");
            }
        }
    }

    #[test]
    fn r_larger_than_n_counts_nothing() {
        assert_eq!(permutation(3, 4), 0);
        assert_eq!(combination(3, 4), 0);
    }

    #[test]
    fn caesar_shifts_letters_only() {
        assert_eq!(caesar_encrypt("HOLA", 3), "KROD");
        assert_eq!(caesar_encrypt("XYZ", 3), "ABC");
        assert_eq!(caesar_encrypt("A-B 1", 1), "B-C 1");
        assert_eq!(caesar_encrypt("hola", 5), "hola");
    }

    #[test]
    fn caesar_round_trips_every_shift() {
        let words = ["HOLA", "MATE", "EXITO", "GRAFO", "LOGICA", "ABCDEFGHIJKLMNOPQRSTUVWXYZ"];
        for shift in 1..=25u8 {
            for w in words {
                let enc = caesar_encrypt(w, shift);
                assert_ne!(enc, w, "shift {shift} left {w} unchanged");
                assert_eq!(caesar_decrypt(&enc, shift), w, "round trip failed: {w} shift={shift}");
            }
        }
    }
}
