use dynbits::{BitVector, Capacity};
use proptest::prelude::*;

fn arbitrary_bits(max_len: usize) -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..max_len)
}

fn equal_length_bits(max_len: usize) -> impl Strategy<Value = (Vec<bool>, Vec<bool>)> {
    (0..max_len).prop_flat_map(|len| {
        (
            prop::collection::vec(any::<bool>(), len),
            prop::collection::vec(any::<bool>(), len),
        )
    })
}

proptest! {
    #[test]
    fn string_round_trip(bits in arbitrary_bits(300)) {
        let bv = BitVector::from_bits(&bits, Capacity::Growable).unwrap();
        let parsed: BitVector = bv.to_string().parse().unwrap();
        prop_assert_eq!(parsed, bv);
    }

    #[test]
    fn padding_keeps_source_in_tail(bits in arbitrary_bits(100), extra in 0usize..50) {
        let capacity = bits.len() + extra;
        let bv = BitVector::from_bits(&bits, Capacity::Fixed(capacity)).unwrap();

        prop_assert_eq!(bv.len(), capacity);
        prop_assert!(bv.as_slice()[..extra].iter().all(|&bit| !bit));
        prop_assert_eq!(&bv.as_slice()[extra..], bits.as_slice());
    }

    #[test]
    fn longer_source_is_rejected(bits in prop::collection::vec(any::<bool>(), 1..100)) {
        let capacity = bits.len() - 1;
        prop_assert!(BitVector::from_bits(&bits, Capacity::Fixed(capacity)).is_err());
    }

    #[test]
    fn self_identities(bits in arbitrary_bits(300)) {
        let a = BitVector::from(bits);

        prop_assert!((&a ^ &a).none());
        prop_assert_eq!(&(&a & &a), &a);
        prop_assert_eq!(&(&a | &a), &a);
    }

    #[test]
    fn bitwise_matches_elementwise((left, right) in equal_length_bits(300)) {
        let a = BitVector::from(left.clone());
        let b = BitVector::from(right.clone());

        let and = &a & &b;
        let or = &a | &b;
        let xor = &a ^ &b;
        for index in 0..left.len() {
            prop_assert_eq!(and[index], left[index] && right[index]);
            prop_assert_eq!(or[index], left[index] || right[index]);
            prop_assert_eq!(xor[index], left[index] ^ right[index]);
        }
    }

    #[test]
    fn mismatched_lengths_truncate_both_forms(left in arbitrary_bits(100), right in arbitrary_bits(100)) {
        let a = BitVector::from(left.clone());
        let b = BitVector::from(right.clone());
        let expected_len = left.len().min(right.len());

        let pure = &a & &b;
        let mut assigned = a.clone();
        assigned &= &b;

        prop_assert_eq!(pure.len(), expected_len);
        prop_assert_eq!(assigned, pure);
    }

    #[test]
    fn shift_saturates(bits in arbitrary_bits(200), extra in 0usize..10) {
        let len = bits.len();
        let mut left = BitVector::from(bits.clone());
        let mut right = BitVector::from(bits);

        left.shift_left_assign(len + extra);
        right.shift_right_assign(len + extra);

        prop_assert_eq!(left.len(), len);
        prop_assert!(left.none());
        prop_assert_eq!(right.len(), len);
        prop_assert!(right.none());
    }

    #[test]
    fn shifts_match_elementwise(bits in arbitrary_bits(200), amount in 0usize..200) {
        let len = bits.len();
        let mut left = BitVector::from(bits.clone());
        let mut right = BitVector::from(bits.clone());
        left <<= amount;
        right >>= amount;

        for index in 0..len {
            let from_left = index.checked_add(amount).filter(|&i| i < len).map_or(false, |i| bits[i]);
            let from_right = index.checked_sub(amount).map_or(false, |i| bits[i]);
            prop_assert_eq!(left[index], from_left);
            prop_assert_eq!(right[index], from_right);
        }
    }

    #[test]
    fn reverse_is_involution(bits in arbitrary_bits(300)) {
        let original = BitVector::from(bits);
        let mut bv = original.clone();
        bv.reverse().reverse();
        prop_assert_eq!(bv, original);
    }

    #[test]
    fn integer_round_trip(value in any::<u64>(), extra in 0usize..64) {
        let natural = BitVector::from_integer(value, Capacity::Growable).unwrap();
        let padded = BitVector::from_integer(value, Capacity::Fixed(natural.len() + extra)).unwrap();

        prop_assert_eq!(natural.to_unsigned(), Ok(value));
        prop_assert_eq!(padded.to_unsigned(), Ok(value));
        prop_assert_eq!(natural.to_string(), format!("{value:b}"));
    }

    #[test]
    fn quantifiers_agree(bits in arbitrary_bits(100)) {
        let bv = BitVector::from(bits.clone());

        prop_assert_eq!(bv.all(), bits.iter().all(|&bit| bit));
        prop_assert_eq!(bv.any(), bits.iter().any(|&bit| bit));
        prop_assert_eq!(bv.none(), !bv.any());
        prop_assert_eq!(bv.count_ones() + bv.count_zeros(), bv.len());
    }
}
