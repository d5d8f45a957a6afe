//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : `evaluate` ne panique jamais, quel que soit le texte
//! - invariant clé : entourer une expression bien formée de parenthèses ne change rien

use std::time::{Duration, Instant};

use super::{evaluate, try_evaluate, Nombre};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

/// Bruit : caractères utiles + quelques intrus, longueur bornée.
fn gen_bruit(rng: &mut Rng) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '3', '7', '9', '+', '-', '*', '/', '%', '^', '(', ')', ',', '.', ' ', 'u',
        'e', 'x',
    ];
    let n = rng.pick(12) as usize;
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/// Expression bien formée + sa valeur de référence (i64, arithmétique modulaire).
///
/// Le '-' binaire n’apparaît qu’après un littéral (sinon il serait lu comme unaire).
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, i64) {
    let atome = |rng: &mut Rng| {
        let n = rng.pick(20) as i64;
        (n.to_string(), n)
    };

    if depth == 0 {
        return atome(rng);
    }

    match rng.pick(6) {
        0 => atome(rng),
        1 => {
            let (a, va) = gen_expr(rng, depth - 1);
            let (b, vb) = gen_expr(rng, depth - 1);
            (format!("({a}+{b})"), va.wrapping_add(vb))
        }
        2 => {
            let (a, va) = gen_expr(rng, depth - 1);
            let (b, vb) = gen_expr(rng, depth - 1);
            (format!("({a}*{b})"), va.wrapping_mul(vb))
        }
        3 => {
            let (a, va) = atome(rng);
            let (b, vb) = gen_expr(rng, depth - 1);
            (format!("({a}-{b})"), va.wrapping_sub(vb))
        }
        4 => {
            let (a, va) = gen_expr(rng, depth - 1);
            (format!("(-{a})"), va.wrapping_neg())
        }
        _ => {
            let (a, va) = atome(rng);
            let (b, vb) = atome(rng);
            let (c, vc) = atome(rng);
            // priorités internes : a + b * c
            (format!("({a}+{b}*{c})"), va + vb * vc)
        }
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

fn deux_fois_pareil<T: Nombre>(expr: &str) {
    let a = evaluate::<T>(expr);
    let b = evaluate::<T>(expr);
    assert_eq!(a, b, "non déterministe: expr={expr:?} type={}", T::NOM);
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..600 {
        budget(t0, max);

        let expr = gen_bruit(&mut rng);
        deux_fois_pareil::<i32>(&expr);
        deux_fois_pareil::<i64>(&expr);
        deux_fois_pareil::<f32>(&expr);
        deux_fois_pareil::<f64>(&expr);

        match try_evaluate::<f64>(&expr) {
            Ok(_) => seen_ok += 1,
            Err(_) => {
                assert_eq!(evaluate::<f64>(&expr), 0.0, "expr={expr:?}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_reference_entiere() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 5);
        assert_eq!(
            try_evaluate::<i64>(&expr),
            Ok(attendu),
            "expr={expr:?}"
        );
    }
}

#[test]
fn fuzz_safe_parentheses_neutres() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..200 {
        budget(t0, max);

        let (expr, _) = gen_expr(&mut rng, 4);
        let entoure = format!("({expr})");
        assert_eq!(evaluate::<i64>(&entoure), evaluate::<i64>(&expr), "E={expr:?}");
        assert_eq!(evaluate::<f64>(&entoure), evaluate::<f64>(&expr), "E={expr:?}");
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_secs(1);

    let expr = somme_balancee("1", 800);
    assert_eq!(evaluate::<i32>(&expr), 800);

    let plate = vec!["1"; 5000].join("+");
    assert_eq!(evaluate::<i64>(&plate), 5000);

    budget(t0, max);
}
