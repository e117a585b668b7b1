/// Implement [`Record`](crate::copy::Record) and [`Reflect`](crate::copy::Reflect) for a struct.
///
/// List the exported fields in declaration order. Fields left out are internal: they are never
/// enumerated as a source and never written as a destination. A field can be exported under a
/// different designator with `field => "name"`.
///
/// Field types must implement `Reflect`.
///
/// ```
/// use xcopy::copy::copy;
/// use xcopy::impl_record;
///
/// #[derive(Default)]
/// struct Account {
/// 	id: u64,
/// 	display_name: String,
/// 	tags: Vec<String>,
/// 	session: u32,
/// }
///
/// impl_record!(Account { id, display_name => "displayName", tags });
///
/// let payload = serde_json::json!({ "id": "17", "displayName": "ada", "tags": ["x"], "session": 9 });
/// let mut account = Account::default();
/// copy(&payload, &mut account).unwrap();
///
/// assert_eq!(account.id, 17);
/// assert_eq!(account.display_name, "ada");
/// assert_eq!(account.tags, vec!["x".to_owned()]);
/// assert_eq!(account.session, 0);
/// ```
#[macro_export]
macro_rules! impl_record {
	(@name $field:ident) => {
		stringify!($field)
	};
	(@name $field:ident $alias:literal) => {
		$alias
	};
	($ty:ty { $($field:ident $(=> $alias:literal)?),* $(,)? }) => {
		impl $crate::copy::Record for $ty {
			fn type_name(&self) -> &'static str {
				stringify!($ty)
			}

			fn fields(&self) -> ::std::vec::Vec<$crate::copy::FieldRef<'_>> {
				::std::vec![$(
					$crate::copy::FieldRef {
						name: $crate::impl_record!(@name $field $($alias)?),
						value: &self.$field,
					}
				),*]
			}

			#[allow(unused_variables)]
			fn field_mut(&mut self, name: &str) -> ::std::option::Option<&mut dyn $crate::copy::Reflect> {
				$(
					if name == $crate::impl_record!(@name $field $($alias)?) {
						let slot: &mut dyn $crate::copy::Reflect = &mut self.$field;
						return ::std::option::Option::Some(slot);
					}
				)*
				::std::option::Option::None
			}
		}

		impl $crate::copy::Reflect for $ty {
			fn reflect(&self) -> $crate::copy::Result<$crate::copy::ValueRef<'_>> {
				::std::result::Result::Ok($crate::copy::ValueRef::Record(self))
			}

			fn reflect_mut(&mut self) -> $crate::copy::Result<$crate::copy::ValueMut<'_>> {
				::std::result::Result::Ok($crate::copy::ValueMut::Record(self))
			}

			fn type_name(&self) -> &'static str {
				stringify!($ty)
			}
		}
	};
}
