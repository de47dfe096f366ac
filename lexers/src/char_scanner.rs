#![deny(warnings)]

use crate::scanner::Scanner;

static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static SYMBOLS: &[char] = &['+', '-', '*', '/', '(', ')'];


impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    // scan numbers like [0-9]+(\.[0-9]*)?
    // a second '.' is left in place for the caller to trip on
    pub fn scan_decimal(&mut self) -> Option<String> {
        if !self.skip_all(DIGITS) {
            return None;
        }
        if self.accept(&'.').is_some() {
            self.skip_all(DIGITS); // "2." is a number too
        }
        Some(self.extract_string())
    }

    // single char operators and brackets
    pub fn scan_arith_symbol(&mut self) -> Option<char> {
        let symbol = self.accept_any(SYMBOLS)?;
        self.ignore();
        Some(symbol)
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_decimals() {
        let tests = vec!["987", "0", "41.98", "3.", "0.125", "007.50"];
        for t in tests.iter() {
            let result = Scanner::new(t.chars()).scan_decimal();
            assert_eq!(Some(t.to_string()), result);
        }
    }

    #[test]
    fn scan_decimal_stops_at_second_point() {
        let mut s = Scanner::new("2.5.3".chars());
        assert_eq!(s.scan_decimal(), Some("2.5".to_string()));
        assert_eq!(s.position(), 3);
        assert_eq!(s.peek(), Some('.'));

        let mut s = Scanner::new("2..5".chars());
        assert_eq!(s.scan_decimal(), Some("2.".to_string()));
        assert_eq!(s.peek(), Some('.'));
    }

    #[test]
    fn scan_decimal_needs_leading_digit() {
        for t in [".5", "-3", "x1", ""].iter() {
            let mut s = Scanner::new(t.chars());
            assert_eq!(s.scan_decimal(), None);
            assert_eq!(s.position(), 0);
        }
    }

    #[test]
    fn scan_symbols() {
        let mut s = Scanner::new("+-*/()=".chars());
        let mut found = Vec::new();
        while let Some(sym) = s.scan_arith_symbol() {
            found.push(sym);
        }
        assert_eq!(found, vec!['+', '-', '*', '/', '(', ')']);
        assert_eq!(s.peek(), Some('='));
        assert_eq!(s.position(), 6);
    }
}
