//! Macros expanding one in-place arithmetic routine into the full set
//! of operator impls: owned and borrowed `BigInt` operands on either
//! side, plus `i64` on either side for mixed expressions.

macro_rules! forward_binop {
    (impl $op:ident: $method:ident, $op_assign:ident: $assign_method:ident, $func:path, $func_i64:path) => {
        impl<const BASE: u32> $op_assign<&BigInt<BASE>> for BigInt<BASE> {
            fn $assign_method(&mut self, rhs: &BigInt<BASE>) {
                $func(self, rhs);
            }
        }

        impl<const BASE: u32> $op_assign<BigInt<BASE>> for BigInt<BASE> {
            fn $assign_method(&mut self, rhs: BigInt<BASE>) {
                $func(self, &rhs);
            }
        }

        impl<const BASE: u32> $op_assign<i64> for BigInt<BASE> {
            fn $assign_method(&mut self, rhs: i64) {
                $func_i64(self, rhs);
            }
        }

        impl<const BASE: u32> $op<BigInt<BASE>> for BigInt<BASE> {
            type Output = BigInt<BASE>;

            fn $method(mut self, rhs: BigInt<BASE>) -> BigInt<BASE> {
                $func(&mut self, &rhs);
                self
            }
        }

        impl<const BASE: u32> $op<&BigInt<BASE>> for BigInt<BASE> {
            type Output = BigInt<BASE>;

            fn $method(mut self, rhs: &BigInt<BASE>) -> BigInt<BASE> {
                $func(&mut self, rhs);
                self
            }
        }

        impl<const BASE: u32> $op<BigInt<BASE>> for &BigInt<BASE> {
            type Output = BigInt<BASE>;

            fn $method(self, rhs: BigInt<BASE>) -> BigInt<BASE> {
                let mut lhs = self.clone();
                $func(&mut lhs, &rhs);
                lhs
            }
        }

        impl<const BASE: u32> $op<&BigInt<BASE>> for &BigInt<BASE> {
            type Output = BigInt<BASE>;

            fn $method(self, rhs: &BigInt<BASE>) -> BigInt<BASE> {
                let mut lhs = self.clone();
                $func(&mut lhs, rhs);
                lhs
            }
        }

        impl<const BASE: u32> $op<i64> for BigInt<BASE> {
            type Output = BigInt<BASE>;

            fn $method(mut self, rhs: i64) -> BigInt<BASE> {
                $func_i64(&mut self, rhs);
                self
            }
        }

        impl<const BASE: u32> $op<i64> for &BigInt<BASE> {
            type Output = BigInt<BASE>;

            fn $method(self, rhs: i64) -> BigInt<BASE> {
                let mut lhs = self.clone();
                $func_i64(&mut lhs, rhs);
                lhs
            }
        }

        impl<const BASE: u32> $op<BigInt<BASE>> for i64 {
            type Output = BigInt<BASE>;

            fn $method(self, rhs: BigInt<BASE>) -> BigInt<BASE> {
                let mut lhs = BigInt::from(self);
                $func(&mut lhs, &rhs);
                lhs
            }
        }

        impl<const BASE: u32> $op<&BigInt<BASE>> for i64 {
            type Output = BigInt<BASE>;

            fn $method(self, rhs: &BigInt<BASE>) -> BigInt<BASE> {
                let mut lhs = BigInt::from(self);
                $func(&mut lhs, rhs);
                lhs
            }
        }
    };
}

macro_rules! forward_shift {
    (impl $op:ident: $method:ident, $op_assign:ident: $assign_method:ident, $func:path, $($count:ty),+) => {
        $(
            impl<const BASE: u32> $op_assign<$count> for BigInt<BASE> {
                fn $assign_method(&mut self, count: $count) {
                    $func(self, count as i64);
                }
            }

            impl<const BASE: u32> $op<$count> for BigInt<BASE> {
                type Output = BigInt<BASE>;

                fn $method(mut self, count: $count) -> BigInt<BASE> {
                    $func(&mut self, count as i64);
                    self
                }
            }

            impl<const BASE: u32> $op<$count> for &BigInt<BASE> {
                type Output = BigInt<BASE>;

                fn $method(self, count: $count) -> BigInt<BASE> {
                    let mut lhs = self.clone();
                    $func(&mut lhs, count as i64);
                    lhs
                }
            }
        )+
    };
}
