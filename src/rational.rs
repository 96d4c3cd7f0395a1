use std::fmt::{self, Debug};
use std::ops::{Add, Mul, Neg};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// An exact fraction of two arbitrary-precision integers.
///
/// Every Lagrange term is held in this form so that no intermediate result is
/// ever rounded. The representation is kept canonical: `gcd(num, den) = 1`
/// and `den > 0`, so equality is plain field equality.
#[derive(Clone, PartialEq, Eq)]
pub struct Rational {
    num: BigInt,
    den: BigInt,
}

impl Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.num, self.den)
    }
}

impl Rational {
    /// Construct a fraction, canonicalizing sign and common factors.
    pub fn new(num: BigInt, den: BigInt) -> Self {
        assert!(!den.is_zero(), "zero denominator");
        let (mut num, mut den) = if den.is_negative() {
            (-num, -den)
        } else {
            (num, den)
        };
        let g = num.gcd(&den);
        if !g.is_one() {
            num /= &g;
            den /= &g;
        }
        Rational { num, den }
    }

    pub fn zero() -> Self {
        Rational {
            num: BigInt::zero(),
            den: BigInt::one(),
        }
    }

    pub fn from_integer(n: BigInt) -> Self {
        Rational {
            num: n,
            den: BigInt::one(),
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.num
    }

    pub fn denominator(&self) -> &BigInt {
        &self.den
    }

    /// The fraction as an integer, if the denominator is one.
    pub fn to_integer(&self) -> Option<BigInt> {
        if self.den.is_one() {
            Some(self.num.clone())
        } else {
            None
        }
    }
}

impl Add<&Rational> for Rational {
    type Output = Rational;
    fn add(self, rhs: &Rational) -> Rational {
        Rational::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            self.den * &rhs.den,
        )
    }
}

impl Mul<&Rational> for Rational {
    type Output = Rational;
    fn mul(self, rhs: &Rational) -> Rational {
        Rational::new(self.num * &rhs.num, self.den * &rhs.den)
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;
    fn mul(self, rhs: &Rational) -> Rational {
        Rational::new(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.den.is_one() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
