pub mod element;
pub mod errors;
pub mod locked_set;
pub mod set;
pub mod snapshot;

pub use element::{Element, ElementType, Shared};
pub use errors::SetError;
pub use locked_set::LockedSet;
pub use set::{SetIterator, TypeSafeSet};
pub use snapshot::Snapshot;

#[cfg(test)]
mod tests {
    use parameterized_test::create;

    use super::{Element, LockedSet, SetError, TypeSafeSet};

    enum Step {
        Add(Option<Element>),
        Remove(Option<Element>),
        Contains(Option<Element>),
    }

    enum Outcome {
        Done(bool),
        Nil,
        WrongType,
    }

    fn run(set: &mut LockedSet, step: Step) -> Result<bool, SetError> {
        match step {
            Step::Add(e) => set.add(e),
            Step::Remove(e) => set.remove(e.as_ref()),
            Step::Contains(e) => set.contains(e.as_ref()),
        }
    }

    fn assert_outcome(got: Result<bool, SetError>, expected: Outcome) {
        match (got, expected) {
            (Ok(got), Outcome::Done(expected)) => assert_eq!(got, expected),
            (Err(SetError::NilElement), Outcome::Nil) => {}
            (Err(SetError::TypeMismatch { .. }), Outcome::WrongType) => {}
            (got, _) => panic!("unexpected outcome {got:?}"),
        }
    }

    create! {
        create_scenario_test,
        (steps, size_after), {
            let mut set = LockedSet::new();
            assert!(set.is_empty());
            for (step, expected) in steps {
                let got = run(&mut set, step);
                assert_outcome(got, expected);
            }
            assert_eq!(set.size(), size_after);
            assert_eq!(set.to_vec().len(), size_after);
        }
    }

    fn int(v: i32) -> Option<Element> {
        Some(Element::new(v))
    }

    fn text(v: &'static str) -> Option<Element> {
        Some(Element::new(v))
    }

    create_scenario_test! {
        type_stays_locked_after_emptying: (vec![
            (Step::Add(int(1)), Outcome::Done(true)),
            (Step::Add(int(1)), Outcome::Done(false)),
            (Step::Add(text("x")), Outcome::WrongType),
            (Step::Remove(int(1)), Outcome::Done(true)),
            (Step::Add(text("x")), Outcome::WrongType),
            (Step::Contains(text("x")), Outcome::WrongType)
        ], 0),
        distinct_values_both_land: (vec![
            (Step::Add(int(1)), Outcome::Done(true)),
            (Step::Add(int(2)), Outcome::Done(true)),
            (Step::Contains(int(1)), Outcome::Done(true)),
            (Step::Contains(int(2)), Outcome::Done(true))
        ], 2),
        nil_never_locks: (vec![
            (Step::Add(None), Outcome::Nil),
            (Step::Remove(None), Outcome::Nil),
            (Step::Contains(None), Outcome::Nil),
            (Step::Add(text("first")), Outcome::Done(true)),
            (Step::Add(None), Outcome::Nil)
        ], 1),
        removing_absent_value_is_not_an_error: (vec![
            (Step::Add(int(1)), Outcome::Done(true)),
            (Step::Remove(int(2)), Outcome::Done(false)),
            (Step::Remove(int(1)), Outcome::Done(true)),
            (Step::Contains(int(1)), Outcome::Done(false)),
            (Step::Add(int(2)), Outcome::Done(true))
        ], 1),
    }

    #[test]
    fn works_through_trait_objects() {
        let mut set: Box<dyn TypeSafeSet> = Box::new(LockedSet::new());
        assert_eq!(set.add(Some(Element::new('a'))), Ok(true));
        assert_eq!(set.add(Some(Element::new('b'))), Ok(true));

        let other = LockedSet::try_from_elements([Element::new('b'), Element::new('a')])
            .expect("chars share a type");
        assert!(set.equals(Some(&other)));
        assert!(other.equals(Some(&*set)));

        let mut it = set.iterator();
        let mut seen = Vec::new();
        while it.has_next() {
            seen.push(it.next().expect("element before exhaustion"));
        }
        assert_eq!(seen, set.to_vec());
    }

    #[test]
    fn snapshot_drives_a_for_loop() {
        let set = LockedSet::try_from_elements((0..4u16).map(Element::new)).expect("u16 only");
        let snapshot = set.snapshot();
        let mut total = 0;
        for e in snapshot {
            total += e.downcast_ref::<u16>().copied().unwrap_or_default();
        }
        assert_eq!(total, 6);
    }
}
