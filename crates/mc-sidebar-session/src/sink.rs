//! Outbound packet destination.

use mc_sidebar_proto::packets::Packet;

/// Receives packets for one client. Sending never blocks and never fails from
/// the session's point of view; queuing and delivery belong to the transport.
pub trait PacketSink {
    fn send(&mut self, packet: Packet);
}

impl PacketSink for Vec<Packet> {
    fn send(&mut self, packet: Packet) {
        self.push(packet);
    }
}

impl<S: PacketSink + ?Sized> PacketSink for &mut S {
    fn send(&mut self, packet: Packet) {
        (**self).send(packet);
    }
}
