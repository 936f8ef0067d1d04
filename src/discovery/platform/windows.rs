//! Windows structured adapter source using `GetAdaptersAddresses`.

use crate::discovery::{AdapterQuery, AdapterRecord, QueryError};
use windows::Win32::Foundation::WIN32_ERROR;
use windows::Win32::NetworkManagement::IpHelper::{
    GAA_FLAG_SKIP_ANYCAST, GAA_FLAG_SKIP_DNS_SERVER, GAA_FLAG_SKIP_MULTICAST,
    GAA_FLAG_SKIP_UNICAST, GetAdaptersAddresses, IP_ADAPTER_ADDRESSES_LH,
};
use windows::Win32::NetworkManagement::Ndis::IfOperStatusUp;
use windows::Win32::Networking::WinSock::AF_UNSPEC;

/// Buffer size hint for `GetAdaptersAddresses`.
/// The API will tell us the actual required size if this is insufficient.
const INITIAL_BUFFER_SIZE: u32 = 16384;

/// Windows implementation of [`AdapterQuery`] backed by
/// `GetAdaptersAddresses`.
///
/// `FriendlyName` is the `NetConnectionID`-equivalent that netsh accepts
/// in `name=` arguments; `Description` carries the hardware label. An
/// adapter counts as enabled+connected when its operational status is up.
///
/// # Example
///
/// ```no_run
/// use dns_switch::discovery::{AdapterQuery, platform::WindowsAdapterQuery};
///
/// let query = WindowsAdapterQuery::new();
/// for record in query.records().expect("Failed to query adapters") {
///     println!("{:?}: {:?}", record.connection_id, record.enabled);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct WindowsAdapterQuery {
    // Currently no configuration needed, but struct allows future extension
    _private: (),
}

impl WindowsAdapterQuery {
    /// Creates a new Windows adapter query.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AdapterQuery for WindowsAdapterQuery {
    fn records(&self) -> Result<Vec<AdapterRecord>, QueryError> {
        query_records()
    }
}

/// Queries all adapters and extracts raw records from the linked list.
fn query_records() -> Result<Vec<AdapterRecord>, QueryError> {
    let buffer = adapter_addresses_buffer()?;

    let mut records = Vec::new();
    // SAFETY: GetAdaptersAddresses returns a properly aligned buffer for
    // IP_ADAPTER_ADDRESSES_LH. The Windows API guarantees alignment of the
    // returned data structures.
    #[allow(clippy::cast_ptr_alignment)]
    let mut current = buffer.as_ptr().cast::<IP_ADAPTER_ADDRESSES_LH>();

    // SAFETY: We iterate through a linked list returned by
    // GetAdaptersAddresses. The list is valid as long as `buffer` is alive.
    while !current.is_null() {
        let adapter = unsafe { &*current };
        records.push(parse_record(adapter));
        current = adapter.Next;
    }

    Ok(records)
}

/// Calls `GetAdaptersAddresses` and returns the raw buffer containing
/// adapter data.
///
/// This function handles the two-call pattern:
/// 1. First call with estimated buffer size
/// 2. Retry with exact size if buffer was too small
fn adapter_addresses_buffer() -> Result<Vec<u8>, QueryError> {
    // The query needs identity and status only, no address lists.
    let flags = GAA_FLAG_SKIP_ANYCAST
        | GAA_FLAG_SKIP_MULTICAST
        | GAA_FLAG_SKIP_DNS_SERVER
        | GAA_FLAG_SKIP_UNICAST;
    let family = u32::from(AF_UNSPEC.0);

    let mut buffer: Vec<u8> = vec![0u8; INITIAL_BUFFER_SIZE as usize];
    let mut size = INITIAL_BUFFER_SIZE;

    // SAFETY: We provide a valid buffer and size. The function writes
    // adapter information to the buffer and updates `size` with the
    // required length.
    let result = unsafe {
        GetAdaptersAddresses(
            family,
            flags,
            None,
            Some(buffer.as_mut_ptr().cast()),
            &raw mut size,
        )
    };

    handle_api_result(result, &mut buffer, &mut size, flags, family)?;

    Ok(buffer)
}

/// Handles the result of `GetAdaptersAddresses`, potentially retrying with
/// a larger buffer.
///
/// # Coverage Note
///
/// Excluded from coverage: the overflow retry needs a host whose adapter
/// data exceeds 16KB, and the error paths need actual API failures.
#[cfg(not(tarpaulin_include))]
fn handle_api_result(
    result: u32,
    buffer: &mut Vec<u8>,
    size: &mut u32,
    flags: windows::Win32::NetworkManagement::IpHelper::GET_ADAPTERS_ADDRESSES_FLAGS,
    family: u32,
) -> Result<(), QueryError> {
    use windows::Win32::Foundation::{ERROR_BUFFER_OVERFLOW, NO_ERROR};

    if result == ERROR_BUFFER_OVERFLOW.0 {
        buffer.resize(*size as usize, 0);

        // SAFETY: Same as the first call, but with a correctly sized buffer.
        let result = unsafe {
            GetAdaptersAddresses(
                family,
                flags,
                None,
                Some(buffer.as_mut_ptr().cast()),
                &raw mut *size,
            )
        };

        if result != NO_ERROR.0 {
            return Err(windows::core::Error::from(WIN32_ERROR(result)).into());
        }
    } else if result != NO_ERROR.0 {
        return Err(windows::core::Error::from(WIN32_ERROR(result)).into());
    }

    Ok(())
}

/// Extracts the raw record fields from one `IP_ADAPTER_ADDRESSES_LH`.
///
/// Absent fields become `None` and are resolved by the directory's
/// validation step; nothing here is fatal.
fn parse_record(adapter: &IP_ADAPTER_ADDRESSES_LH) -> AdapterRecord {
    // SAFETY: FriendlyName and Description are wide strings owned by the
    // adapter buffer; reading them is valid while the buffer is alive.
    let connection_id = if adapter.FriendlyName.is_null() {
        None
    } else {
        unsafe { adapter.FriendlyName.to_string().ok() }
    };
    let description = if adapter.Description.is_null() {
        None
    } else {
        unsafe { adapter.Description.to_string().ok() }
    };

    // SAFETY: The IfIndex union variant is always initialized by the API.
    let interface_index = Some(unsafe { adapter.Anonymous1.Anonymous.IfIndex });

    AdapterRecord {
        enabled: Some(adapter.OperStatus == IfOperStatusUp),
        connection_id,
        description,
        interface_index,
    }
}
