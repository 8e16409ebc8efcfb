//! Lifecycle of the process-wide agent. Everything runs in a single test so
//! the steps happen in order against the one shared static.

use profiling_agent::{
    global, object_size, premain, AgentError, AgentState, CapabilityError, ObjectRef,
    ShallowSizer, SizeCapability,
};

struct FixedSize(u64);

impl SizeCapability for FixedSize {
    fn object_size(&self, _object: Option<ObjectRef<'_>>) -> Result<u64, CapabilityError> {
        Ok(self.0)
    }
}

struct RejectsNull(u64);

impl SizeCapability for RejectsNull {
    fn object_size(&self, object: Option<ObjectRef<'_>>) -> Result<u64, CapabilityError> {
        object.map(|_| self.0).ok_or(CapabilityError::NullReference)
    }
}

#[test]
fn test_global_agent_lifecycle() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    // 1. Before bootstrap
    assert_eq!(object_size(Some(ObjectRef::new(&1u8))), Err(AgentError::UninitializedCapability));

    // 2. Bootstrap with a fake that always says 16
    premain(Some("opaque=args"), FixedSize(16));
    assert_eq!(global().state(), AgentState::Initialized);
    assert_eq!(object_size(Some(ObjectRef::new(&vec![0u8; 4096]))), Ok(16));
    assert_eq!(object_size(Some(ObjectRef::new(&()))), Ok(16));
    assert_eq!(object_size(None), Ok(16));

    // 3. Null goes to the capability, including its error
    premain(None, RejectsNull(24));
    assert_eq!(object_size(Some(ObjectRef::new(&0u32))), Ok(24));
    assert_eq!(
        object_size(None),
        Err(AgentError::Capability(CapabilityError::NullReference))
    );

    // 4. Last write wins with the real host capability
    premain(None, ShallowSizer::new());
    assert_eq!(object_size(Some(ObjectRef::new(&0u32))), Ok(4));
    assert_eq!(object_size(Some(ObjectRef::new(&[0u8; 48]))), Ok(48));
    assert_eq!(
        object_size(Some(ObjectRef::new(&String::from("heap text")))),
        Ok(std::mem::size_of::<String>() as u64)
    );
    assert!(global().is_initialized());
}
