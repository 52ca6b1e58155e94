#![no_main]

use arbitrary::Arbitrary;
use collection_utils::{
    every, fold, includes, keys, map_values, reduce, some, zip, Error, Flow,
};
use indexmap::IndexMap;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    Sequence { data: Vec<i64>, target: i64 },
    Keyed { entries: Vec<(String, i64)>, target: i64 },
    Floats { data: Vec<f64>, target: f64 },
    Zip { sequences: Vec<Vec<u8>> },
    Flow { offsets: Vec<i16>, arg: i64 },
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Sequence { data, target } => {
            let expected: Vec<String> = (0..data.len()).map(|i| i.to_string()).collect();
            assert_eq!(keys(&data), expected);

            let mapped: Vec<i64> = map_values(&data, |value, _| value.wrapping_neg());
            assert_eq!(mapped.len(), data.len());

            let sum = reduce(&data, |a, b, _, _| a.wrapping_add(*b), None);
            match data.iter().copied().reduce(i64::wrapping_add) {
                Some(expected) => assert_eq!(sum, Ok(expected)),
                None => assert_eq!(sum, Err(Error::EmptyCollection)),
            }
            let seeded = reduce(&data, |a, b, _, _| a.wrapping_add(*b), Some(target));
            assert_eq!(seeded, Ok(fold(&data, target, |a, b, _, _| a.wrapping_add(*b))));

            assert_eq!(includes(&data, &target), data.contains(&target));
            let above = |value: &i64, _, _: &Vec<i64>| *value > target;
            assert_eq!(some(&data, above), data.iter().any(|value| *value > target));
            assert_eq!(every(&data, above), data.iter().all(|value| *value > target));
        }

        FuzzInput::Keyed { entries, target } => {
            let map: IndexMap<String, i64> = entries.into_iter().collect();
            let expected: Vec<String> = map.keys().cloned().collect();
            assert_eq!(keys(&map), expected);

            let mapped: IndexMap<String, bool> = map_values(&map, |value, _| *value == target);
            assert_eq!(keys(&mapped), expected);
            assert_eq!(includes(&map, &target), mapped.values().any(|hit| *hit));
        }

        FuzzInput::Floats { data, target } => {
            let expected = data
                .iter()
                .any(|value| *value == target || (value.is_nan() && target.is_nan()));
            assert_eq!(includes(&data, &target), expected);
        }

        FuzzInput::Zip { sequences } => {
            let rows = zip(&sequences);
            let longest = sequences.iter().map(Vec::len).max().unwrap_or(0);
            assert_eq!(rows.len(), longest);
            for (index, row) in rows.iter().enumerate() {
                assert_eq!(row.len(), sequences.len());
                for (slot, sequence) in row.iter().zip(&sequences) {
                    assert_eq!(*slot, sequence.get(index).copied());
                }
            }
        }

        FuzzInput::Flow { offsets, arg } => {
            let expected = offsets
                .iter()
                .fold(arg, |acc, offset| acc.wrapping_add(*offset as i64));
            let flow = offsets.iter().fold(Flow::new(), |flow, offset| {
                let offset = *offset as i64;
                flow.then(move |x: i64| x.wrapping_add(offset))
            });
            assert_eq!(flow.len(), offsets.len());
            assert_eq!(flow.call(arg), expected);
            assert_eq!(flow.call(arg), expected);
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
