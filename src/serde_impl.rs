use core::{
	fmt,
	marker::PhantomData
};
use serde::{
	de::{
		SeqAccess,
		Visitor
	},
	Deserialize,
	Deserializer,
	Serialize,
	Serializer
};
use crate::BigArrayList;

impl<T: Serialize> Serialize for BigArrayList<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_seq(self.iter())
	}
}

struct ListVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ListVisitor<T> {
	type Value = BigArrayList<T>;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a sequence")
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
		// the size hint is untrusted, growth takes care of longer sequences.
		let mut list = BigArrayList::new();
		while let Some(element) = seq.next_element()? {
			list.push(element)
		}

		Ok(list)
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for BigArrayList<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_seq(ListVisitor(PhantomData))
	}
}
